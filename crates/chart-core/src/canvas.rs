// File: crates/chart-core/src/canvas.rs
// Summary: Drawing surface contract the chart renders through, plus paint/text/path value types.

use std::ops::{Deref, DerefMut};

use crate::color::Color;
use crate::geometry::{Point, Rect};

/// Marker shape used for data points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointMode {
    None,
    #[default]
    Circle,
    Square,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaintStyle {
    #[default]
    Fill,
    Stroke,
    StrokeAndFill,
}

/// Dash pattern: on/off lengths in pixels and the starting phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dash {
    pub intervals: [f32; 2],
    pub phase: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shader {
    /// Two-stop linear gradient, clamped outside `start..end`.
    LinearGradient { start: Point, end: Point, colors: [Color; 2] },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub style: PaintStyle,
    pub stroke_width: f32,
    pub anti_alias: bool,
    pub dash: Option<Dash>,
    pub shader: Option<Shader>,
}

impl Paint {
    pub fn fill(color: Color) -> Self {
        Self { color, style: PaintStyle::Fill, stroke_width: 0.0, anti_alias: false, dash: None, shader: None }
    }

    pub fn stroke(color: Color, width: f32) -> Self {
        Self { style: PaintStyle::Stroke, stroke_width: width, ..Self::fill(color) }
    }

    pub fn with_style(mut self, style: PaintStyle) -> Self { self.style = style; self }
    pub fn with_anti_alias(mut self, on: bool) -> Self { self.anti_alias = on; self }
    pub fn with_dash(mut self, dash: Dash) -> Self { self.dash = Some(dash); self }
    pub fn with_shader(mut self, shader: Shader) -> Self { self.shader = Some(shader); self }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
    pub align: TextAlign,
    pub bold: bool,
    pub anti_alias: bool,
}

impl TextStyle {
    pub fn new(size: f32, color: Color) -> Self {
        Self { size, color, align: TextAlign::Left, bold: false, anti_alias: true }
    }

    pub fn aligned(mut self, align: TextAlign) -> Self { self.align = align; self }
    pub fn bold(mut self) -> Self { self.bold = true; self }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathVerb {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// Polyline path. Relative segments are resolved to absolute points as they are added.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    verbs: Vec<PathVerb>,
    cursor: Point,
}

impl Path {
    pub fn new() -> Self { Self::default() }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.cursor = p;
        self.verbs.push(PathVerb::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.cursor = p;
        self.verbs.push(PathVerb::LineTo(p));
        self
    }

    pub fn r_line_to(&mut self, dx: f32, dy: f32) -> &mut Self {
        let p = Point::new(self.cursor.x + dx, self.cursor.y + dy);
        self.line_to(p)
    }

    pub fn close(&mut self) -> &mut Self {
        self.verbs.push(PathVerb::Close);
        self
    }

    pub fn verbs(&self) -> &[PathVerb] { &self.verbs }
    pub fn is_empty(&self) -> bool { self.verbs.is_empty() }
}

/// Drawing surface the chart renders onto. Backends translate each call to
/// their native API; transforms follow the usual save/restore stack model.
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint);
    fn draw_rect(&mut self, rect: Rect, paint: &Paint);
    fn draw_round_rect(&mut self, rect: Rect, rx: f32, ry: f32, paint: &Paint);
    fn draw_circle(&mut self, center: Point, radius: f32, paint: &Paint);
    fn draw_path(&mut self, path: &Path, paint: &Paint);
    /// Draw `text` with its baseline at `origin.y`; `origin.x` is interpreted per `style.align`.
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle);
    /// Bounding box of `text` relative to its baseline origin.
    fn measure_text(&self, text: &str, style: &TextStyle) -> Rect;
    fn save(&mut self);
    fn restore(&mut self);
    fn rotate(&mut self, degrees: f32);
    fn translate(&mut self, dx: f32, dy: f32);

    /// Filled marker of diameter/side `size` centered on `center`.
    fn draw_point(&mut self, center: Point, size: f32, color: Color, mode: PointMode) {
        let paint = Paint::fill(color).with_anti_alias(true);
        match mode {
            PointMode::None => {}
            PointMode::Circle => self.draw_circle(center, size / 2.0, &paint),
            PointMode::Square => self.draw_rect(Rect::from_center(center, size, size), &paint),
        }
    }
}

/// Saves the canvas state on creation and restores it on drop.
pub struct AutoRestore<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
}

impl<'a, C: Canvas + ?Sized> AutoRestore<'a, C> {
    pub fn new(canvas: &'a mut C) -> Self {
        canvas.save();
        Self { canvas }
    }
}

impl<C: Canvas + ?Sized> Deref for AutoRestore<'_, C> {
    type Target = C;
    fn deref(&self) -> &C { self.canvas }
}

impl<C: Canvas + ?Sized> DerefMut for AutoRestore<'_, C> {
    fn deref_mut(&mut self) -> &mut C { self.canvas }
}

impl<C: Canvas + ?Sized> Drop for AutoRestore<'_, C> {
    fn drop(&mut self) {
        self.canvas.restore();
    }
}
