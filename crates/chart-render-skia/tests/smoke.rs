// File: crates/chart-render-skia/tests/smoke.rs
// Purpose: End-to-end raster smoke tests writing PNGs and reading back RGBA pixels.

use chart_core::{Chart, ChartView, Entry, PointChart, TouchPhase};
use chart_render_skia::{RenderOptions, SkiaRenderer};

fn sample_chart() -> Chart {
    let values = [10.0, 14.0, 16.0, 25.0, 10.0, 15.0, 2.0, 19.0];
    Chart::new(PointChart::default()).with_entries(
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Entry::new(v).with_label(format!("{}", i + 1)).with_value_label(format!("{v}")))
            .collect(),
    )
}

#[test]
fn render_smoke_png() {
    let chart = sample_chart();
    let renderer = SkiaRenderer::new();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");

    let frame = renderer.render_to_png(&chart, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
    assert_eq!(frame.touch_targets().len(), 8);

    let (bytes, _) = renderer.render_to_png_bytes(&chart, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn rgba_buffer_matches_surface() {
    let chart = sample_chart();
    let renderer = SkiaRenderer::new();
    let opts = RenderOptions { width: 320, height: 200 };
    let (img, frame) = renderer.render_to_rgba8(&chart, &opts).expect("rgba");
    assert_eq!((img.width, img.height), (320, 200));
    assert_eq!(img.stride, 320 * 4);
    assert_eq!(img.pixels.len(), 320 * 200 * 4);
    assert!(frame.layout().is_some());

    // top-left corner is background
    let bg = chart.config.theme.background;
    assert_eq!(&img.pixels[0..4], &[bg.r, bg.g, bg.b, 255]);
}

#[test]
fn empty_chart_renders_background_only() {
    let chart = Chart::new(PointChart::default());
    let renderer = SkiaRenderer::new();
    let opts = RenderOptions { width: 64, height: 32 };
    let (img, frame) = renderer.render_to_rgba8(&chart, &opts).expect("rgba");
    assert!(frame.touch_targets().is_empty());
    let bg = chart.config.theme.background;
    assert!(img.pixels.chunks_exact(4).all(|px| px == [bg.r, bg.g, bg.b, 255]));
}

#[test]
fn invalid_surface_is_an_error() {
    let chart = sample_chart();
    let renderer = SkiaRenderer::new();
    assert!(renderer.render_to_png_bytes(&chart, &RenderOptions { width: 0, height: 400 }).is_err());
}

#[test]
fn view_touch_between_paints() {
    let renderer = SkiaRenderer::new();
    let opts = RenderOptions::default();
    let mut view = ChartView::new(sample_chart());

    renderer.paint_view_to_png(&mut view, &opts, "target/test_out/view.png").expect("paint");
    let p = view.frame().and_then(|f| f.layout()).expect("layout").points[3];
    assert!(view.touch(TouchPhase::Released, p.x, p.y));
    assert_eq!(view.chart().selected(), Some(3));
    assert!(view.needs_repaint());

    renderer.paint_view_to_png(&mut view, &opts, "target/test_out/view_selected.png").expect("repaint");
    assert!(!view.needs_repaint());
}
