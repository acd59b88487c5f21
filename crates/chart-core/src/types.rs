// File: crates/chart-core/src/types.rs
// Summary: Shared defaults (surface size, margins, text and marker sizes).

/// Default surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 400;

/// Spacing around and between columns, in pixels.
pub const MARGIN: f32 = 20.0;
/// Footer and value label text size, in pixels.
pub const LABEL_TEXT_SIZE: f32 = 16.0;
/// Marker diameter for unselected points.
pub const POINT_SIZE: f32 = 14.0;
/// Alpha of the area fill under each point; 0 disables the fill.
pub const POINT_AREA_ALPHA: u8 = 100;
