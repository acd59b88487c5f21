// File: crates/chart-core/src/view.rs
// Host-side view state: owns a chart, keeps the last frame and tracks repaint requests.

use log::trace;

use crate::canvas::Canvas;
use crate::chart::Chart;
use crate::error::ChartError;
use crate::touch::FrameContext;

/// Pointer phases a host forwards. Only `Released` acts on the chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Pressed,
    Moved,
    Released,
    Cancelled,
}

pub struct ChartView {
    chart: Chart,
    frame: Option<FrameContext>,
    needs_repaint: bool,
}

impl ChartView {
    pub fn new(chart: Chart) -> Self {
        Self { chart, frame: None, needs_repaint: true }
    }

    pub fn chart(&self) -> &Chart { &self.chart }

    /// Mutable access invalidates the view; the previous frame is dropped.
    pub fn chart_mut(&mut self) -> &mut Chart {
        self.invalidate();
        &mut self.chart
    }

    pub fn set_chart(&mut self, chart: Chart) {
        self.chart = chart;
        self.invalidate();
    }

    pub fn invalidate(&mut self) {
        self.frame = None;
        self.needs_repaint = true;
    }

    pub fn needs_repaint(&self) -> bool { self.needs_repaint }

    /// Frame from the last successful paint, if any.
    pub fn frame(&self) -> Option<&FrameContext> { self.frame.as_ref() }

    pub fn paint(&mut self, canvas: &mut dyn Canvas, width: i32, height: i32) -> Result<(), ChartError> {
        let frame = self.chart.draw(canvas, width, height)?;
        self.frame = Some(frame);
        self.needs_repaint = false;
        Ok(())
    }

    /// Forwards a released touch to the chart. Returns true when the chart changed; the view is
    /// then marked for repaint. Touches before the first paint are ignored.
    pub fn touch(&mut self, phase: TouchPhase, x: f32, y: f32) -> bool {
        if phase != TouchPhase::Released {
            return false;
        }
        let Some(frame) = self.frame.as_ref() else {
            trace!("touch at ({x}, {y}) before first paint");
            return false;
        };
        if self.chart.handle_touch(frame, x, y) {
            self.needs_repaint = true;
            return true;
        }
        false
    }
}
