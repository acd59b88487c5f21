// File: crates/chart-core/src/chart.rs
// Summary: Chart base: shared configuration, value bounds, entry ownership, draw entry point and touch dispatch.

use log::{debug, trace};

use crate::canvas::Canvas;
use crate::entry::{Entry, EntrySet};
use crate::error::ChartError;
use crate::point_chart::PointChart;
use crate::scale::ValueBounds;
use crate::theme::Theme;
use crate::touch::{FrameContext, TouchAction};
use crate::types::{LABEL_TEXT_SIZE, MARGIN};

/// Layout and styling shared by every chart variant. Read-only during a draw.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub margin: f32,
    pub label_text_size: f32,
    /// Lower bound override; the data minimum still wins when smaller.
    pub min_value: Option<f64>,
    /// Upper bound override; the data maximum still wins when larger.
    pub max_value: Option<f64>,
    pub theme: Theme,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            margin: MARGIN,
            label_text_size: LABEL_TEXT_SIZE,
            min_value: None,
            max_value: None,
            theme: Theme::default(),
        }
    }
}

impl ChartConfig {
    pub fn with_margin(mut self, margin: f32) -> Self { self.margin = margin; self }
    pub fn with_label_text_size(mut self, size: f32) -> Self { self.label_text_size = size; self }
    pub fn with_min_value(mut self, v: f64) -> Self { self.min_value = Some(v); self }
    pub fn with_max_value(mut self, v: f64) -> Self { self.max_value = Some(v); self }
    pub fn with_theme(mut self, theme: Theme) -> Self { self.theme = theme; self }
}

/// Everything a variant needs to lay out and draw one frame.
pub struct DrawContext<'a> {
    pub canvas: &'a mut dyn Canvas,
    pub config: &'a ChartConfig,
    pub entries: &'a [Entry],
    pub bounds: ValueBounds,
    pub width: f32,
    pub height: f32,
}

/// Variant-specific drawing. Called with a non-empty entry slice on a cleared canvas.
pub trait ChartContent {
    fn draw_content(&self, ctx: &mut DrawContext<'_>, frame: &mut FrameContext);
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChartKind {
    Point(PointChart),
}

impl ChartContent for ChartKind {
    fn draw_content(&self, ctx: &mut DrawContext<'_>, frame: &mut FrameContext) {
        match self {
            ChartKind::Point(p) => p.draw_content(ctx, frame),
        }
    }
}

impl From<PointChart> for ChartKind {
    fn from(p: PointChart) -> Self { ChartKind::Point(p) }
}

pub struct Chart {
    pub config: ChartConfig,
    pub kind: ChartKind,
    entries: EntrySet,
    generation: u64,
}

impl Chart {
    pub fn new(kind: impl Into<ChartKind>) -> Self {
        Self { config: ChartConfig::default(), kind: kind.into(), entries: EntrySet::default(), generation: 0 }
    }

    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_entries(mut self, entries: Vec<Entry>) -> Self {
        self.set_entries(entries);
        self
    }

    /// Replaces the entry sequence. Frames drawn before this call no longer accept touches.
    pub fn set_entries(&mut self, entries: Vec<Entry>) {
        self.entries = EntrySet::new(entries);
        self.generation += 1;
    }

    pub fn entries(&self) -> &[Entry] { self.entries.as_slice() }
    pub fn entry_set(&self) -> &EntrySet { &self.entries }
    pub fn generation(&self) -> u64 { self.generation }
    pub fn selected(&self) -> Option<usize> { self.entries.selected() }

    pub fn apply_selection(&mut self, index: usize) -> Result<bool, ChartError> {
        self.entries.apply_selection(index)
    }

    pub fn select(&mut self, index: Option<usize>) -> Result<(), ChartError> {
        self.entries.select(index)
    }

    pub fn clear_selection(&mut self) { self.entries.clear_selection(); }

    /// Value bounds for the current entries and overrides.
    pub fn value_bounds(&self) -> Result<ValueBounds, ChartError> {
        if let (Some(min), Some(max)) = (self.config.min_value, self.config.max_value) {
            if min > max {
                return Err(ChartError::InvalidValueBounds { min, max });
            }
        }
        Ok(self.derived_bounds())
    }

    fn derived_bounds(&self) -> ValueBounds {
        ValueBounds::from_values(
            self.entries.iter().map(|e| e.value),
            self.config.min_value,
            self.config.max_value,
        )
    }

    pub fn min_value(&self) -> f64 { self.derived_bounds().min }
    pub fn max_value(&self) -> f64 { self.derived_bounds().max }
    /// `max_value - min_value`; zero for flat or empty data.
    pub fn value_range(&self) -> f64 { self.derived_bounds().range() }

    /// Clears the canvas, lays out and draws one frame. The returned frame holds this frame's
    /// touch targets; pass it to [`Chart::handle_touch`].
    pub fn draw(&self, canvas: &mut dyn Canvas, width: i32, height: i32) -> Result<FrameContext, ChartError> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidSurface { width, height });
        }
        if let Some((index, e)) = self.entries.iter().enumerate().find(|(_, e)| !e.value.is_finite()) {
            return Err(ChartError::NonFiniteValue { index, value: e.value });
        }
        let bounds = self.value_bounds()?;

        canvas.clear(self.config.theme.background);
        let mut frame = FrameContext::new(self.generation);
        if self.entries.is_empty() {
            debug!("no entries; drew background only");
            return Ok(frame);
        }

        let mut ctx = DrawContext {
            canvas,
            config: &self.config,
            entries: self.entries.as_slice(),
            bounds,
            width: width as f32,
            height: height as f32,
        };
        self.kind.draw_content(&mut ctx, &mut frame);
        Ok(frame)
    }

    /// Runs the first target of `frame` that contains `(x, y)`. Returns true when one matched,
    /// meaning the chart changed and should be redrawn.
    pub fn handle_touch(&mut self, frame: &FrameContext, x: f32, y: f32) -> bool {
        if frame.generation() != self.generation {
            debug!("ignoring touch on frame for generation {} (current {})", frame.generation(), self.generation);
            return false;
        }
        let Some(target) = frame.hit_test(x, y) else {
            return false;
        };
        match target.action {
            TouchAction::ToggleSelection(index) => match self.entries.apply_selection(index) {
                Ok(selected) => trace!("touch ({x}, {y}) toggled entry {index} -> {selected}"),
                Err(err) => {
                    debug!("touch target rejected: {err}");
                    return false;
                }
            },
        }
        true
    }
}
