// File: crates/chart-core/src/touch.rs
// Summary: Per-frame hit regions. A frame is produced by one draw call and read by touch handling.

use crate::geometry::Rect;
use crate::layout::PointLayout;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchAction {
    /// Exclusive selection toggle of the entry at this index.
    ToggleSelection(usize),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchTarget {
    pub rect: Rect,
    pub action: TouchAction,
}

/// Output of a single draw: the touch targets in registration order and the layout they came from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameContext {
    generation: u64,
    targets: Vec<TouchTarget>,
    layout: Option<PointLayout>,
}

impl FrameContext {
    pub(crate) fn new(generation: u64) -> Self {
        Self { generation, targets: Vec::new(), layout: None }
    }

    /// Entry-set generation the frame was drawn for.
    pub fn generation(&self) -> u64 { self.generation }

    pub fn register_touch_target(&mut self, rect: Rect, action: TouchAction) {
        self.targets.push(TouchTarget { rect, action });
    }

    pub fn touch_targets(&self) -> &[TouchTarget] { &self.targets }

    /// First registered target containing `(x, y)`.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<&TouchTarget> {
        self.targets.iter().find(|t| t.rect.contains(x, y))
    }

    pub fn layout(&self) -> Option<&PointLayout> { self.layout.as_ref() }

    pub(crate) fn set_layout(&mut self, layout: PointLayout) {
        self.layout = Some(layout);
    }
}
