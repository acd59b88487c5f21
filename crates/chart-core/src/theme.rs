// File: crates/chart-core/src/theme.rs
// Summary: Visual constants for point charts: palette, callout geometry, marker sizes, placeholders.

use crate::canvas::Dash;
use crate::color::Color;

/// Geometry and fallback text of the selection callout, relative to the selected point.
/// Horizontal offsets are mirrored when the callout opens leftward.
#[derive(Clone, Debug, PartialEq)]
pub struct CalloutStyle {
    pub width: f32,
    /// Distance from the point up to the callout's top edge.
    pub top: f32,
    /// Distance from the point up to the callout's bottom edge.
    pub bottom: f32,
    pub corner_radius: f32,
    /// The pointer triangle starts this far above the point.
    pub pointer_offset: f32,
    pub pointer_height: f32,
    pub pointer_width: f32,
    /// Horizontal distance from the point to the center of the text lines.
    pub text_center: f32,
    pub amount_baseline: f32,
    pub amount_size: f32,
    pub heading_baseline: f32,
    pub heading_size: f32,
    pub placeholder_amount: String,
    pub placeholder_heading: String,
}

impl Default for CalloutStyle {
    fn default() -> Self {
        Self {
            width: 90.0,
            top: 70.0,
            bottom: 20.0,
            corner_radius: 5.0,
            pointer_offset: 15.0,
            pointer_height: 10.0,
            pointer_width: 20.0,
            text_center: 45.0,
            amount_baseline: 30.0,
            amount_size: 20.0,
            heading_baseline: 55.0,
            heading_size: 11.0,
            placeholder_amount: "$790".to_string(),
            placeholder_heading: "3/14 - 7/14".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis_label: Color,
    pub selected_label: Color,
    pub guide_line: Color,
    pub selected_guide_line: Color,
    pub guide_dash: Dash,
    pub callout_fill: Color,
    pub callout_amount: Color,
    pub callout_heading: Color,
    /// Inner fill of a selected marker, drawn over the enlarged marker.
    pub halo: Color,
    pub selected_point_size: f32,
    /// The halo is this much smaller than the enlarged marker.
    pub halo_inset: f32,
    pub touch_target_size: f32,
    /// Right edge of the min/max axis labels, measured from the margin.
    pub axis_label_inset: f32,
    /// Gap between a boundary marker and the footer label below it.
    pub boundary_marker_gap: f32,
    pub callout: CalloutStyle,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            axis_label: Color::WHITE,
            selected_label: Color::WHITE,
            guide_line: Color::from_argb(127, 255, 255, 255),
            selected_guide_line: Color::WHITE,
            guide_dash: Dash { intervals: [10.0, 2.0], phase: 20.0 },
            callout_fill: Color::WHITE,
            callout_amount: Color::BLACK,
            callout_heading: Color::from_rgb(61, 61, 61),
            halo: Color::BLACK,
            selected_point_size: 20.0,
            halo_inset: 12.0,
            touch_target_size: 40.0,
            axis_label_inset: 30.0,
            boundary_marker_gap: 5.0,
            callout: CalloutStyle::default(),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 250, 250, 252),
            axis_label: Color::from_argb(255, 20, 20, 30),
            selected_label: Color::from_argb(255, 20, 20, 30),
            guide_line: Color::from_argb(127, 60, 60, 70),
            selected_guide_line: Color::from_argb(255, 60, 60, 70),
            callout_fill: Color::from_argb(255, 20, 20, 30),
            callout_amount: Color::WHITE,
            callout_heading: Color::from_rgb(200, 200, 205),
            halo: Color::WHITE,
            ..Self::dark()
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
