// File: crates/chart-render-skia/src/canvas.rs
// Summary: chart_core::Canvas implemented over a borrowed skia Canvas.

use chart_core::{Canvas, Color, Paint, PaintStyle, Path, PathVerb, Point, Rect, Shader, TextAlign, TextStyle};
use skia_safe as skia;

use crate::text::TextShaper;

pub struct SkiaCanvas<'a> {
    canvas: &'a skia::Canvas,
    shaper: &'a TextShaper,
}

impl<'a> SkiaCanvas<'a> {
    pub fn new(canvas: &'a skia::Canvas, shaper: &'a TextShaper) -> Self {
        Self { canvas, shaper }
    }
}

fn to_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_point(p: Point) -> skia::Point {
    skia::Point::new(p.x, p.y)
}

fn to_rect(r: Rect) -> skia::Rect {
    skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
}

fn to_paint(p: &Paint) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(to_color(p.color));
    paint.set_anti_alias(p.anti_alias);
    paint.set_style(match p.style {
        PaintStyle::Fill => skia::paint::Style::Fill,
        PaintStyle::Stroke => skia::paint::Style::Stroke,
        PaintStyle::StrokeAndFill => skia::paint::Style::StrokeAndFill,
    });
    paint.set_stroke_width(p.stroke_width);
    if let Some(dash) = p.dash {
        paint.set_path_effect(skia::PathEffect::dash(&dash.intervals, dash.phase));
    }
    if let Some(Shader::LinearGradient { start, end, colors }) = p.shader {
        let colors = [to_color(colors[0]), to_color(colors[1])];
        // degenerate gradients (start == end) yield no shader; the paint color is used instead
        if let Some(shader) = skia::Shader::linear_gradient(
            (to_point(start), to_point(end)),
            &colors[..],
            None,
            skia::TileMode::Clamp,
            None,
            None,
        ) {
            paint.set_shader(shader);
        }
    }
    paint
}

fn to_path(path: &Path) -> skia::Path {
    let mut out = skia::Path::new();
    for verb in path.verbs() {
        match *verb {
            PathVerb::MoveTo(p) => { out.move_to(to_point(p)); }
            PathVerb::LineTo(p) => { out.line_to(to_point(p)); }
            PathVerb::Close => { out.close(); }
        }
    }
    out
}

impl Canvas for SkiaCanvas<'_> {
    fn clear(&mut self, color: Color) {
        self.canvas.clear(to_color(color));
    }

    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint) {
        self.canvas.draw_line(to_point(from), to_point(to), &to_paint(paint));
    }

    fn draw_rect(&mut self, rect: Rect, paint: &Paint) {
        self.canvas.draw_rect(to_rect(rect), &to_paint(paint));
    }

    fn draw_round_rect(&mut self, rect: Rect, rx: f32, ry: f32, paint: &Paint) {
        self.canvas.draw_round_rect(to_rect(rect), rx, ry, &to_paint(paint));
    }

    fn draw_circle(&mut self, center: Point, radius: f32, paint: &Paint) {
        self.canvas.draw_circle(to_point(center), radius, &to_paint(paint));
    }

    fn draw_path(&mut self, path: &Path, paint: &Paint) {
        self.canvas.draw_path(&to_path(path), &to_paint(paint));
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        let font = self.shaper.font(style);
        let mut paint = skia::Paint::default();
        paint.set_color(to_color(style.color));
        paint.set_anti_alias(style.anti_alias);

        let x = match style.align {
            TextAlign::Left => origin.x,
            TextAlign::Center => origin.x - font.measure_str(text, Some(&paint)).0 / 2.0,
            TextAlign::Right => origin.x - font.measure_str(text, Some(&paint)).0,
        };
        self.canvas.draw_str(text, (x, origin.y), &font, &paint);
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> Rect {
        self.shaper.bounds(text, style)
    }

    fn save(&mut self) {
        self.canvas.save();
    }

    fn restore(&mut self) {
        self.canvas.restore();
    }

    fn rotate(&mut self, degrees: f32) {
        self.canvas.rotate(degrees, None);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.canvas.translate((dx, dy));
    }
}
