// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the point chart model, layout, canvas contract and touch handling.

pub mod canvas;
pub mod chart;
pub mod color;
pub mod entry;
pub mod error;
pub mod format;
pub mod geometry;
pub mod layout;
pub mod point_chart;
pub mod recording;
pub mod scale;
pub mod theme;
pub mod touch;
pub mod types;
pub mod view;

pub use canvas::{AutoRestore, Canvas, Dash, Paint, PaintStyle, Path, PathVerb, PointMode, Shader, TextAlign, TextStyle};
pub use chart::{Chart, ChartConfig, ChartContent, ChartKind, DrawContext};
pub use color::Color;
pub use entry::{Entry, EntrySet};
pub use error::ChartError;
pub use format::{fit_label, format_axis_value};
pub use geometry::{Point, Rect, Size};
pub use layout::PointLayout;
pub use point_chart::{BoundaryMarkers, PointChart};
pub use recording::{DrawOp, RecordingCanvas};
pub use scale::{ValueBounds, ValueScale};
pub use theme::{CalloutStyle, Theme};
pub use touch::{FrameContext, TouchAction, TouchTarget};
pub use view::{ChartView, TouchPhase};
