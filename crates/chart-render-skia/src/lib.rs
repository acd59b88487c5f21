// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia backend for chart-core: canvas adapter, font handling and CPU raster output.

pub mod canvas;
pub mod raster;
pub mod text;

pub use canvas::SkiaCanvas;
pub use raster::{RenderOptions, RgbaImage, SkiaRenderer};
pub use text::TextShaper;
