//! Percent-space rectangle geometry and invariant enforcement
//!
//! Slot geometry lives in page-percent space: x/y/w/h are percentages of
//! the page's width/height (0-100). `normalize_rect` is the single place
//! the geometric invariants are enforced and runs every time a rect is
//! produced, so malformed geometry from legacy or external sources is
//! silently repaired rather than surfaced as an error.

use serde::{Deserialize, Serialize};

/// Round to 2 decimal places, the stored precision for slot geometry
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Clamp a value into `[min, max]`
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Axis-aligned bounding box in page-percent space, before rotation is applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    /// A rect covering the entire page
    pub const FULL_PAGE: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Trailing vertical edge (`x + w`)
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Trailing horizontal edge (`y + h`)
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.w / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.h / 2.0
    }

    /// Normalized copy of this rect; see [`normalize_rect`]
    pub fn normalized(self) -> Rect {
        normalize_rect(self)
    }
}

/// Enforce the rect invariants: `w,h` in `[1, 100]`, `x` in `[0, 100-w]`,
/// `y` in `[0, 100-h]`, all fields rounded to 2 decimals.
///
/// Width and height are clamped before position, so an oversized rect is
/// shrunk to fit rather than pushed to a negative origin. Rounding is the
/// final step. Idempotent and total over finite input; NaN and infinities
/// are a caller precondition, not guarded here.
pub fn normalize_rect(rect: Rect) -> Rect {
    let w = round2(clamp(rect.w, 1.0, 100.0));
    let h = round2(clamp(rect.h, 1.0, 100.0));
    let x = round2(clamp(rect.x, 0.0, 100.0 - w));
    let y = round2(clamp(rect.y, 0.0, 100.0 - h));
    Rect { x, y, w, h }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_in_range_is_identity() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(normalize_rect(r), r);
    }

    #[test]
    fn test_normalize_shrinks_oversized_before_clamping_position() {
        // Width wins over position: a too-large rect is shrunk, x stays 0
        let r = normalize_rect(Rect::new(-10.0, -10.0, 150.0, 150.0));
        assert_eq!(r, Rect::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn test_normalize_pulls_overflowing_rect_back_on_page() {
        let r = normalize_rect(Rect::new(80.0, 90.0, 40.0, 40.0));
        assert_eq!(r, Rect::new(60.0, 60.0, 40.0, 40.0));
    }

    #[test]
    fn test_normalize_enforces_minimum_size() {
        let r = normalize_rect(Rect::new(5.0, 5.0, 0.0, -3.0));
        assert_eq!(r.w, 1.0);
        assert_eq!(r.h, 1.0);
    }

    #[test]
    fn test_normalize_rounds_to_two_decimals() {
        let r = normalize_rect(Rect::new(10.123456, 20.987654, 30.006, 40.004));
        assert_eq!(r, Rect::new(10.12, 20.99, 30.01, 40.0));
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(
            x in -500.0f64..500.0,
            y in -500.0f64..500.0,
            w in -500.0f64..500.0,
            h in -500.0f64..500.0,
        ) {
            let once = normalize_rect(Rect::new(x, y, w, h));
            prop_assert_eq!(normalize_rect(once), once);
        }

        #[test]
        fn prop_normalize_output_is_contained(
            x in -500.0f64..500.0,
            y in -500.0f64..500.0,
            w in -500.0f64..500.0,
            h in -500.0f64..500.0,
        ) {
            let r = normalize_rect(Rect::new(x, y, w, h));
            prop_assert!(r.x >= 0.0);
            prop_assert!(r.y >= 0.0);
            prop_assert!((1.0..=100.0).contains(&r.w));
            prop_assert!((1.0..=100.0).contains(&r.h));
            prop_assert!(r.x + r.w <= 100.0);
            prop_assert!(r.y + r.h <= 100.0);
        }
    }
}
