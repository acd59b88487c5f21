// File: crates/chart-core/src/scale.rs
// Summary: Value bounds derived from entries and the vertical value -> pixel transform.

/// Logical value (entry value).
pub type Value = f64;

/// Inclusive value range shown by a chart. Always contains zero unless an override moves it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueBounds {
    pub min: Value,
    pub max: Value,
}

impl ValueBounds {
    pub const fn new(min: Value, max: Value) -> Self { Self { min, max } }

    /// `min = min(min_override or 0, smallest value)`, `max = max(max_override or 0, largest value)`.
    /// Overrides widen the range but never clip data. No values yields `0..0`.
    pub fn from_values<I>(values: I, min_override: Option<Value>, max_override: Option<Value>) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in values {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if !lo.is_finite() || !hi.is_finite() {
            return Self::new(0.0, 0.0);
        }
        Self::new(min_override.unwrap_or(0.0).min(lo), max_override.unwrap_or(0.0).max(hi))
    }

    pub fn range(&self) -> Value { self.max - self.min }

    /// A zero-width range: every value maps to the same ordinate.
    pub fn is_flat(&self) -> bool { self.range() <= 0.0 }
}

/// Vertical value scale mapping `[min, max]` onto `[bottom_px, top_px]` (larger value -> smaller y).
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub bounds: ValueBounds,
}

impl ValueScale {
    pub fn new(top_px: f32, height_px: f32, bounds: ValueBounds) -> Self {
        Self { top_px, bottom_px: top_px + height_px, bounds }
    }

    pub fn height_px(&self) -> f32 { self.bottom_px - self.top_px }

    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        if self.bounds.is_flat() {
            return self.top_px + self.height_px() / 2.0;
        }
        let ratio = (self.bounds.max - v) / self.bounds.range();
        self.top_px + ratio as f32 * self.height_px()
    }

    /// Pixel row of value zero, pinned to the top or bottom edge when zero lies outside the range.
    pub fn origin_px(&self) -> f32 {
        if self.bounds.max <= 0.0 {
            return self.top_px;
        }
        if self.bounds.min > 0.0 {
            return self.bottom_px;
        }
        // min <= 0 < max, so the range is non-zero here
        self.top_px + (self.bounds.max / self.bounds.range()) as f32 * self.height_px()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_include_zero() {
        let b = ValueBounds::from_values([3.0, 7.0], None, None);
        assert_eq!(b, ValueBounds::new(0.0, 7.0));
        let b = ValueBounds::from_values([-3.0, -1.0], None, None);
        assert_eq!(b, ValueBounds::new(-3.0, 0.0));
    }

    #[test]
    fn overrides_widen_but_never_clip() {
        let b = ValueBounds::from_values([3.0, 7.0], Some(5.0), Some(5.0));
        assert_eq!(b, ValueBounds::new(3.0, 7.0));
        let b = ValueBounds::from_values([3.0, 7.0], Some(-10.0), Some(100.0));
        assert_eq!(b, ValueBounds::new(-10.0, 100.0));
    }

    #[test]
    fn flat_scale_maps_to_middle() {
        let s = ValueScale::new(10.0, 100.0, ValueBounds::new(0.0, 0.0));
        assert_eq!(s.to_px(0.0), 60.0);
        assert_eq!(s.origin_px(), 10.0);
    }
}
