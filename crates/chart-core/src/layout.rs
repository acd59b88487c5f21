// File: crates/chart-core/src/layout.rs
// Summary: Two-pass point chart layout: text measurement, then pixel geometry per entry.

use crate::canvas::{Canvas, TextStyle};
use crate::color::Color;
use crate::entry::Entry;
use crate::geometry::{Point, Rect, Size};
use crate::scale::{ValueBounds, ValueScale};

/// Geometry of one frame, shared by every draw phase.
#[derive(Clone, Debug, PartialEq)]
pub struct PointLayout {
    /// Measured value label boxes, parallel to the entries (empty box when unlabeled).
    pub value_label_sizes: Vec<Rect>,
    pub footer_height: f32,
    pub header_height: f32,
    pub item_size: Size,
    /// Pixel row of value zero.
    pub origin_y: f32,
    pub points: Vec<Point>,
}

impl PointLayout {
    /// Precondition: `entries` is non-empty.
    pub fn compute(
        canvas: &dyn Canvas,
        entries: &[Entry],
        bounds: ValueBounds,
        margin: f32,
        label_text_size: f32,
        width: f32,
        height: f32,
    ) -> Self {
        let value_label_sizes = measure_value_labels(canvas, entries, label_text_size);
        let footer_height = footer_height(entries, margin, label_text_size);
        let header_height = header_height(&value_label_sizes, margin);
        let item_size = item_size(width, height, entries.len(), margin, footer_height, header_height);
        let scale = ValueScale::new(header_height, item_size.height, bounds);
        let points = point_positions(entries, &scale, margin, item_size.width);
        Self {
            value_label_sizes,
            footer_height,
            header_height,
            item_size,
            origin_y: scale.origin_px(),
            points,
        }
    }
}

/// Pass 1: bounding boxes of every value label at `text_size`.
pub fn measure_value_labels(canvas: &dyn Canvas, entries: &[Entry], text_size: f32) -> Vec<Rect> {
    let style = TextStyle::new(text_size, Color::BLACK);
    entries
        .iter()
        .map(|e| match e.value_label.as_deref() {
            Some(text) if !text.is_empty() => canvas.measure_text(text, &style),
            _ => Rect::EMPTY,
        })
        .collect()
}

pub fn footer_height(entries: &[Entry], margin: f32, label_text_size: f32) -> f32 {
    let mut h = margin;
    if entries.iter().any(Entry::has_label) {
        h += label_text_size + margin;
    }
    h
}

/// Room for the vertical value labels, which extend downward from the top margin.
pub fn header_height(value_label_sizes: &[Rect], margin: f32) -> f32 {
    let mut h = margin;
    let widest = value_label_sizes.iter().map(Rect::width).fold(0.0f32, f32::max);
    if widest > 0.0 {
        h += widest + margin;
    }
    h
}

/// Column width and plot height. Precondition: `count > 0`.
pub fn item_size(width: f32, height: f32, count: usize, margin: f32, footer_height: f32, header_height: f32) -> Size {
    debug_assert!(count > 0, "layout requires at least one entry");
    let n = count as f32;
    let w = (width - (n + 1.0) * margin) / n;
    let h = height - margin - footer_height - header_height;
    Size::new(w, h)
}

pub fn y_origin(bounds: ValueBounds, item_height: f32, header_height: f32) -> f32 {
    ValueScale::new(header_height, item_height, bounds).origin_px()
}

/// Pass 2: column centers on x, value scale on y.
pub fn point_positions(entries: &[Entry], scale: &ValueScale, margin: f32, item_width: f32) -> Vec<Point> {
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let x = margin + item_width / 2.0 + i as f32 * (item_width + margin);
            Point::new(x, scale.to_px(e.value))
        })
        .collect()
}
