// File: crates/chart-render-skia/src/raster.rs
// Summary: CPU raster rendering of charts and views to RGBA buffers and PNG files.

use anyhow::Result;
use chart_core::{types, Chart, ChartView, FrameContext};
use log::debug;
use skia_safe as skia;

use crate::canvas::SkiaCanvas;
use crate::text::TextShaper;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: types::WIDTH, height: types::HEIGHT }
    }
}

/// Unpremultiplied RGBA8 pixels, row-major.
#[derive(Clone, Debug)]
pub struct RgbaImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: usize,
}

pub struct SkiaRenderer {
    shaper: TextShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new() }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { shaper: TextShaper::new() }
    }

    pub fn shaper(&self) -> &TextShaper { &self.shaper }

    fn surface(opts: &RenderOptions) -> Result<skia::Surface> {
        skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))
    }

    /// Draws `chart` onto a fresh surface and returns it with the frame context of that draw.
    fn draw_surface(&self, chart: &Chart, opts: &RenderOptions) -> Result<(skia::Surface, FrameContext)> {
        let mut surface = Self::surface(opts)?;
        let frame = {
            let mut canvas = SkiaCanvas::new(surface.canvas(), &self.shaper);
            chart.draw(&mut canvas, opts.width, opts.height)?
        };
        debug!(
            "rendered {}x{} chart with {} entries, {} touch targets",
            opts.width,
            opts.height,
            chart.entries().len(),
            frame.touch_targets().len()
        );
        Ok((surface, frame))
    }

    fn encode_png(surface: &mut skia::Surface) -> Result<Vec<u8>> {
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn render_to_rgba8(&self, chart: &Chart, opts: &RenderOptions) -> Result<(RgbaImage, FrameContext)> {
        let (mut surface, frame) = self.draw_surface(chart, opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        let image = RgbaImage { pixels, width: opts.width as u32, height: opts.height as u32, stride };
        Ok((image, frame))
    }

    pub fn render_to_png_bytes(&self, chart: &Chart, opts: &RenderOptions) -> Result<(Vec<u8>, FrameContext)> {
        let (mut surface, frame) = self.draw_surface(chart, opts)?;
        Ok((Self::encode_png(&mut surface)?, frame))
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories as needed.
    pub fn render_to_png(
        &self,
        chart: &Chart,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<FrameContext> {
        let (bytes, frame) = self.render_to_png_bytes(chart, opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        debug!("wrote {}", path.display());
        Ok(frame)
    }

    /// Paints `view` into a PNG, storing the frame on the view so later touches hit-test against it.
    pub fn paint_view_to_png(
        &self,
        view: &mut ChartView,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let mut surface = Self::surface(opts)?;
        {
            let mut canvas = SkiaCanvas::new(surface.canvas(), &self.shaper);
            view.paint(&mut canvas, opts.width, opts.height)?;
        }
        let bytes = Self::encode_png(&mut surface)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        debug!("wrote {}", path.display());
        Ok(())
    }
}
