// File: crates/chart-render-skia/src/text.rs
// Summary: Font resolution and text metrics for the Skia canvas, with sensible family defaults.

use chart_core::{Rect, TextStyle};
use skia_safe as skia;

pub struct TextShaper {
    typeface: Option<skia::Typeface>,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mgr = skia::FontMgr::default();
        let typeface = ["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans"]
            .iter()
            .find_map(|family| mgr.match_family_style(family, skia::FontStyle::normal()))
            // Use system manager fallback
            .or_else(|| mgr.legacy_make_typeface(None, skia::FontStyle::normal()));
        if typeface.is_none() {
            log::warn!("no system typeface found; text will not render");
        }
        Self { typeface }
    }

    pub fn font(&self, style: &TextStyle) -> skia::Font {
        let size = style.size.max(1.0);
        let mut font = match &self.typeface {
            Some(tf) => skia::Font::from_typeface(tf.clone(), size),
            None => {
                let mut f = skia::Font::default();
                f.set_size(size);
                f
            }
        };
        font.set_embolden(style.bold);
        font.set_edging(if style.anti_alias { skia::font::Edging::AntiAlias } else { skia::font::Edging::Alias });
        font
    }

    /// Advance width of `text`.
    pub fn advance(&self, text: &str, style: &TextStyle) -> f32 {
        self.font(style).measure_str(text, None).0
    }

    /// Ink bounds of `text` relative to its baseline origin.
    pub fn bounds(&self, text: &str, style: &TextStyle) -> Rect {
        let (_, b) = self.font(style).measure_str(text, None);
        Rect::from_ltrb(b.left, b.top, b.right, b.bottom)
    }
}
