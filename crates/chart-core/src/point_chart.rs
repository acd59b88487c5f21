// File: crates/chart-core/src/point_chart.rs
// Summary: Point chart variant: layout plus the fixed draw sequence (areas, points, footer, value labels).
// Notes:
// - Phases run in order; later phases paint over earlier ones and touch targets are registered
//   while points are drawn so they match the final point positions.

use chrono::NaiveDate;
use log::debug;

use crate::canvas::{AutoRestore, Canvas, Paint, PaintStyle, Path, PointMode, Shader, TextAlign, TextStyle};
use crate::chart::{ChartContent, DrawContext};
use crate::entry::Entry;
use crate::format::{fit_label, format_axis_value};
use crate::geometry::{Point, Rect};
use crate::layout::PointLayout;
use crate::theme::Theme;
use crate::touch::{FrameContext, TouchAction};
use crate::types::{POINT_AREA_ALPHA, POINT_SIZE};

/// Fixed text drawn above the footer labels of the first and last columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundaryMarkers {
    pub first: String,
    pub last: String,
}

impl BoundaryMarkers {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self { first: first.into(), last: last.into() }
    }

    /// Abbreviated month names of the period ends, e.g. `Mar` / `Jul`.
    pub fn months(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(start.format("%b").to_string(), end.format("%b").to_string())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointChart {
    pub point_size: f32,
    pub point_mode: PointMode,
    /// Alpha of the gradient under each point; 0 skips the area phase.
    pub point_area_alpha: u8,
    /// Draw the `0` and max-value labels on the left edge.
    pub show_axis_labels: bool,
    pub boundary_markers: Option<BoundaryMarkers>,
}

impl Default for PointChart {
    fn default() -> Self {
        Self {
            point_size: POINT_SIZE,
            point_mode: PointMode::Circle,
            point_area_alpha: POINT_AREA_ALPHA,
            show_axis_labels: true,
            boundary_markers: None,
        }
    }
}

impl PointChart {
    pub fn new() -> Self { Self::default() }

    pub fn with_point_size(mut self, size: f32) -> Self { self.point_size = size; self }
    pub fn with_point_mode(mut self, mode: PointMode) -> Self { self.point_mode = mode; self }
    pub fn with_point_area_alpha(mut self, alpha: u8) -> Self { self.point_area_alpha = alpha; self }
    pub fn with_axis_labels(mut self, on: bool) -> Self { self.show_axis_labels = on; self }
    pub fn with_boundary_markers(mut self, markers: BoundaryMarkers) -> Self {
        self.boundary_markers = Some(markers);
        self
    }

    fn draw_point_areas(&self, ctx: &mut DrawContext<'_>, layout: &PointLayout) {
        if self.point_area_alpha == 0 {
            return;
        }
        let origin = layout.origin_y;
        for (entry, p) in ctx.entries.iter().zip(&layout.points) {
            let top = origin.min(p.y);
            let height = (origin - p.y).abs().max(2.0);
            let rect = Rect::from_ltwh(p.x - self.point_size / 2.0, top, self.point_size, height);

            let full = entry.color.with_alpha(self.point_area_alpha);
            let faded = entry.color.with_alpha(self.point_area_alpha / 3);
            let shader = Shader::LinearGradient {
                start: Point::new(0.0, p.y),
                end: Point::new(0.0, origin),
                colors: [full, faded],
            };
            ctx.canvas.draw_rect(rect, &Paint::fill(full).with_shader(shader));
        }
    }

    fn draw_points(&self, ctx: &mut DrawContext<'_>, layout: &PointLayout, frame: &mut FrameContext) {
        if self.point_mode == PointMode::None {
            return;
        }
        let theme = &ctx.config.theme;
        for (i, (entry, &p)) in ctx.entries.iter().zip(&layout.points).enumerate() {
            let base = Point::new(p.x, layout.origin_y);
            if entry.is_selected() {
                ctx.canvas.draw_line(p, base, &Paint::stroke(theme.selected_guide_line, 1.0));
                draw_callout(ctx.canvas, theme, entry, p, i == 0);

                let size = theme.selected_point_size;
                ctx.canvas.draw_point(p, size, entry.color, self.point_mode);
                ctx.canvas.draw_point(p, size - theme.halo_inset, theme.halo, self.point_mode);
            } else {
                let guide = Paint::stroke(theme.guide_line, 1.0).with_dash(theme.guide_dash);
                ctx.canvas.draw_line(p, base, &guide);
                ctx.canvas.draw_point(p, self.point_size, entry.color, self.point_mode);
            }

            let s = theme.touch_target_size;
            frame.register_touch_target(Rect::from_center(p, s, s), TouchAction::ToggleSelection(i));
        }
    }

    fn draw_footer(&self, ctx: &mut DrawContext<'_>, layout: &PointLayout) {
        let config = ctx.config;
        let theme = &config.theme;
        let margin = config.margin;
        let size = config.label_text_size;
        let last = ctx.entries.len() - 1;

        for (i, (entry, p)) in ctx.entries.iter().zip(&layout.points).enumerate() {
            let Some(label) = entry.label.as_deref().filter(|l| !l.is_empty()) else {
                continue;
            };
            let color = if entry.is_selected() { theme.selected_label } else { entry.text_color };
            let style = TextStyle::new(size, color).aligned(TextAlign::Center);
            let text = fit_label(label, layout.item_size.width, |t| ctx.canvas.measure_text(t, &style).width());

            if let Some(markers) = &self.boundary_markers {
                let marker_y = ctx.height - margin - size - theme.boundary_marker_gap;
                if i == 0 {
                    ctx.canvas.draw_text(&markers.first, Point::new(p.x, marker_y), &style);
                }
                if i == last {
                    ctx.canvas.draw_text(&markers.last, Point::new(p.x, marker_y), &style);
                }
            }
            ctx.canvas.draw_text(text, Point::new(p.x, ctx.height - margin), &style);
        }

        if self.show_axis_labels {
            let max_observed = ctx.entries.iter().map(|e| e.value).fold(f64::NEG_INFINITY, f64::max);
            let style = TextStyle::new(size, theme.axis_label).aligned(TextAlign::Right);
            let x = margin + theme.axis_label_inset;
            let min_y = ctx.height - margin - layout.footer_height;
            ctx.canvas.draw_text(&format_axis_value(0.0), Point::new(x, min_y), &style);
            ctx.canvas.draw_text(&format_axis_value(max_observed), Point::new(x, layout.header_height), &style);
        }
    }

    /// Value labels run vertically down from the top margin, centered on the point's column.
    fn draw_value_labels(&self, ctx: &mut DrawContext<'_>, layout: &PointLayout) {
        let margin = ctx.config.margin;
        let size = ctx.config.label_text_size;
        for (entry, p) in ctx.entries.iter().zip(&layout.points) {
            let Some(text) = entry.value_label.as_deref().filter(|t| !t.is_empty()) else {
                continue;
            };
            let style = TextStyle::new(size, entry.color).bold();
            let mut canvas = AutoRestore::new(&mut *ctx.canvas);
            let bounds = canvas.measure_text(text, &style);
            canvas.rotate(90.0);
            canvas.translate(margin, -p.x + bounds.height() / 2.0);
            canvas.draw_text(text, Point::new(0.0, 0.0), &style);
        }
    }
}

impl ChartContent for PointChart {
    fn draw_content(&self, ctx: &mut DrawContext<'_>, frame: &mut FrameContext) {
        let layout = PointLayout::compute(
            &*ctx.canvas,
            ctx.entries,
            ctx.bounds,
            ctx.config.margin,
            ctx.config.label_text_size,
            ctx.width,
            ctx.height,
        );
        debug!(
            "point layout: {} entries, header {:.1}, footer {:.1}, item {:.1}x{:.1}, origin {:.1}",
            layout.points.len(),
            layout.header_height,
            layout.footer_height,
            layout.item_size.width,
            layout.item_size.height,
            layout.origin_y,
        );

        self.draw_point_areas(ctx, &layout);
        self.draw_points(ctx, &layout, frame);
        self.draw_footer(ctx, &layout);
        self.draw_value_labels(ctx, &layout);
        frame.set_layout(layout);
    }
}

/// Rounded box with a pointer and two text lines above a selected point. Opens rightward for the
/// first column so it stays inside the left edge, leftward otherwise.
fn draw_callout(canvas: &mut dyn Canvas, theme: &Theme, entry: &Entry, p: Point, opens_right: bool) {
    let c = &theme.callout;
    let dir = if opens_right { 1.0 } else { -1.0 };

    let rect = Rect::from_ltrb(p.x, p.y - c.top, p.x + dir * c.width, p.y - c.bottom).sorted();
    canvas.draw_round_rect(rect, c.corner_radius, c.corner_radius, &Paint::fill(theme.callout_fill));

    let tip = Point::new(p.x, p.y - c.pointer_offset);
    let mut pointer = Path::new();
    pointer
        .move_to(tip)
        .r_line_to(0.0, -c.pointer_height)
        .r_line_to(dir * c.pointer_width, 0.0)
        .line_to(tip);

    let text_x = p.x + dir * c.text_center;
    let amount = entry.annotation_label.as_deref().unwrap_or(&c.placeholder_amount);
    let heading = entry.annotation_heading_label.as_deref().unwrap_or(&c.placeholder_heading);
    canvas.draw_text(
        amount,
        Point::new(text_x, p.y - c.amount_baseline),
        &TextStyle::new(c.amount_size, theme.callout_amount).aligned(TextAlign::Center),
    );
    canvas.draw_text(
        heading,
        Point::new(text_x, p.y - c.heading_baseline),
        &TextStyle::new(c.heading_size, theme.callout_heading).aligned(TextAlign::Center),
    );

    let paint = Paint::stroke(theme.callout_fill, 1.0)
        .with_style(PaintStyle::StrokeAndFill)
        .with_anti_alias(true);
    canvas.draw_path(&pointer, &paint);
}
