// File: crates/chart-core/src/recording.rs
// Summary: Canvas that records draw operations instead of rasterizing; deterministic text metrics.
// Notes:
// - Glyphs are measured with a fixed advance (`size * glyph_advance` per char) so layout is
//   reproducible without fonts. Useful for tests, benches and headless inspection.

use crate::canvas::{Canvas, Paint, Path, PointMode, TextStyle};
use crate::color::Color;
use crate::geometry::{Point, Rect};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Color),
    Line { from: Point, to: Point, paint: Paint },
    Rect { rect: Rect, paint: Paint },
    RoundRect { rect: Rect, rx: f32, ry: f32, paint: Paint },
    Circle { center: Point, radius: f32, paint: Paint },
    Point { center: Point, size: f32, color: Color, mode: PointMode },
    Path { path: Path, paint: Paint },
    Text { text: String, origin: Point, style: TextStyle },
    Save,
    Restore,
    Rotate(f32),
    Translate(f32, f32),
}

#[derive(Clone, Debug)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
    glyph_advance: f32,
    depth: usize,
}

impl Default for RecordingCanvas {
    fn default() -> Self { Self::new() }
}

impl RecordingCanvas {
    pub fn new() -> Self { Self { ops: Vec::new(), glyph_advance: 0.5, depth: 0 } }

    /// Per-character advance as a fraction of the text size.
    pub fn with_glyph_advance(mut self, ratio: f32) -> Self {
        self.glyph_advance = ratio.max(0.0);
        self
    }

    pub fn ops(&self) -> &[DrawOp] { &self.ops }
    pub fn take_ops(&mut self) -> Vec<DrawOp> { std::mem::take(&mut self.ops) }
    /// Current save/restore nesting; zero once every save has been restored.
    pub fn depth(&self) -> usize { self.depth }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Point, &TextStyle)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, origin, style } => Some((text.as_str(), *origin, style)),
            _ => None,
        })
    }

    pub fn points(&self) -> impl Iterator<Item = (Point, f32, Color)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Point { center, size, color, .. } => Some((*center, *size, *color)),
            _ => None,
        })
    }

    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * self.glyph_advance
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color) { self.ops.push(DrawOp::Clear(color)); }

    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint) {
        self.ops.push(DrawOp::Line { from, to, paint: paint.clone() });
    }

    fn draw_rect(&mut self, rect: Rect, paint: &Paint) {
        self.ops.push(DrawOp::Rect { rect, paint: paint.clone() });
    }

    fn draw_round_rect(&mut self, rect: Rect, rx: f32, ry: f32, paint: &Paint) {
        self.ops.push(DrawOp::RoundRect { rect, rx, ry, paint: paint.clone() });
    }

    fn draw_circle(&mut self, center: Point, radius: f32, paint: &Paint) {
        self.ops.push(DrawOp::Circle { center, radius, paint: paint.clone() });
    }

    fn draw_path(&mut self, path: &Path, paint: &Paint) {
        self.ops.push(DrawOp::Path { path: path.clone(), paint: paint.clone() });
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        self.ops.push(DrawOp::Text { text: text.to_string(), origin, style: *style });
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> Rect {
        let width = self.text_width(text, style.size);
        if width <= 0.0 {
            return Rect::EMPTY;
        }
        // ascent ~0.75em above the baseline, descent ~0.25em below
        Rect::from_ltrb(0.0, -style.size * 0.75, width, style.size * 0.25)
    }

    fn save(&mut self) {
        self.depth += 1;
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.ops.push(DrawOp::Restore);
    }

    fn rotate(&mut self, degrees: f32) { self.ops.push(DrawOp::Rotate(degrees)); }
    fn translate(&mut self, dx: f32, dy: f32) { self.ops.push(DrawOp::Translate(dx, dy)); }

    fn draw_point(&mut self, center: Point, size: f32, color: Color, mode: PointMode) {
        if mode != PointMode::None {
            self.ops.push(DrawOp::Point { center, size, color, mode });
        }
    }
}
