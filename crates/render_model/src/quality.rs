//! Print-quality estimation for image content
//!
//! Compares an image's natural resolution against what a slot of a given
//! size needs for clean print output. The surrounding system supplies
//! pixel dimensions through [`AssetResolver`]; geometry itself stays
//! resolution-agnostic.

use page_model::Rect;

/// Supplies the natural pixel dimensions of image content on request.
/// Content references are opaque strings (typically URLs); resolution is
/// the surrounding system's job.
pub trait AssetResolver {
    /// Natural (width, height) in pixels, or `None` while unknown
    fn pixel_dimensions(&self, reference: &str) -> Option<(u32, u32)>;
}

/// Full-page print resolution for a consumer photobook (~22x17cm at 300 DPI)
pub const PRINT_WIDTH_PX: u32 = 2600;
pub const PRINT_HEIGHT_PX: u32 = 2050;

/// Print quality rating, worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum QualityLevel {
    SeverelyBlurry,
    Blurry,
    SlightlyBlurry,
    NearSharp,
    Sharp,
}

impl QualityLevel {
    pub fn label(&self) -> &'static str {
        match self {
            QualityLevel::SeverelyBlurry => "Severely blurry",
            QualityLevel::Blurry => "Blurry",
            QualityLevel::SlightlyBlurry => "Slightly blurry",
            QualityLevel::NearSharp => "Nearly sharp",
            QualityLevel::Sharp => "Sharp",
        }
    }
}

/// Outcome of a quality check for one image in one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityInfo {
    pub level: QualityLevel,
    pub actual_width: u32,
    pub actual_height: u32,
    pub required_width: u32,
    pub required_height: u32,
}

/// Pixel resolution a slot of the given percent size needs for clean print
pub fn required_resolution(slot_width_percent: f64, slot_height_percent: f64) -> (u32, u32) {
    (
        (slot_width_percent / 100.0 * PRINT_WIDTH_PX as f64).round() as u32,
        (slot_height_percent / 100.0 * PRINT_HEIGHT_PX as f64).round() as u32,
    )
}

/// Rate an image's print quality in a slot. The bottleneck dimension
/// decides: a panorama squeezed into a tall slot rates by its height.
pub fn print_quality(
    image_width: u32,
    image_height: u32,
    slot_width_percent: f64,
    slot_height_percent: f64,
) -> QualityInfo {
    let (required_width, required_height) = required_resolution(slot_width_percent, slot_height_percent);
    let width_ratio = image_width as f64 / required_width.max(1) as f64;
    let height_ratio = image_height as f64 / required_height.max(1) as f64;
    let ratio = width_ratio.min(height_ratio);

    let level = if ratio >= 0.9 {
        QualityLevel::Sharp
    } else if ratio >= 0.6 {
        QualityLevel::NearSharp
    } else if ratio >= 0.35 {
        QualityLevel::SlightlyBlurry
    } else if ratio >= 0.15 {
        QualityLevel::Blurry
    } else {
        QualityLevel::SeverelyBlurry
    };

    QualityInfo {
        level,
        actual_width: image_width,
        actual_height: image_height,
        required_width,
        required_height,
    }
}

/// Rate the content of one resolved slot, when its dimensions are known
pub fn slot_quality(
    rect: &Rect,
    content: &str,
    resolver: &dyn AssetResolver,
) -> Option<QualityInfo> {
    let (width, height) = resolver.pixel_dimensions(content)?;
    Some(print_quality(width, height, rect.w, rect.h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeResolver(HashMap<String, (u32, u32)>);
    impl AssetResolver for FakeResolver {
        fn pixel_dimensions(&self, reference: &str) -> Option<(u32, u32)> {
            self.0.get(reference).copied()
        }
    }

    #[test]
    fn test_required_resolution_scales_with_slot_size() {
        assert_eq!(required_resolution(100.0, 100.0), (2600, 2050));
        assert_eq!(required_resolution(50.0, 50.0), (1300, 1025));
    }

    #[test]
    fn test_full_resolution_image_is_sharp() {
        let info = print_quality(2600, 2050, 100.0, 100.0);
        assert_eq!(info.level, QualityLevel::Sharp);
    }

    #[test]
    fn test_tiny_image_in_large_slot_is_severely_blurry() {
        let info = print_quality(200, 150, 100.0, 100.0);
        assert_eq!(info.level, QualityLevel::SeverelyBlurry);
    }

    #[test]
    fn test_bottleneck_dimension_decides() {
        // Plenty of width, starved height
        let info = print_quality(5000, 350, 100.0, 100.0);
        assert_eq!(info.level, QualityLevel::Blurry);
    }

    #[test]
    fn test_slot_quality_uses_resolver() {
        let mut dims = HashMap::new();
        dims.insert("photo.jpg".to_string(), (1300, 1025));
        let resolver = FakeResolver(dims);
        let rect = Rect::new(0.0, 0.0, 50.0, 50.0);
        let info = slot_quality(&rect, "photo.jpg", &resolver).unwrap();
        assert_eq!(info.level, QualityLevel::Sharp);
        assert!(slot_quality(&rect, "unknown.jpg", &resolver).is_none());
    }
}
