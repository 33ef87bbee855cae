//! Preset slot arrangements
//!
//! Each preset replaces the entire slot list with a fixed, hand-specified
//! arrangement of normalized rects.

use page_model::{Rect, Slot};

/// Built-in slot arrangements offered by the designer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// One image covering the whole page
    FullPage,
    /// Large photo over a caption block
    PhotoText,
    /// Four equal photos in a 2x2 grid
    Collage2x2,
    /// Two tall photos side by side
    SideBySide,
}

/// The slot arrangement for a preset, in paint order
pub fn preset_slots(preset: Preset) -> Vec<Slot> {
    match preset {
        Preset::FullPage => vec![Slot::image(Rect::new(0.0, 0.0, 100.0, 100.0))],
        Preset::PhotoText => vec![
            Slot::image(Rect::new(5.0, 5.0, 90.0, 55.0)),
            Slot::text(Rect::new(10.0, 65.0, 80.0, 30.0)),
        ],
        Preset::Collage2x2 => vec![
            Slot::image(Rect::new(3.0, 3.0, 45.0, 45.0)),
            Slot::image(Rect::new(52.0, 3.0, 45.0, 45.0)),
            Slot::image(Rect::new(3.0, 52.0, 45.0, 45.0)),
            Slot::image(Rect::new(52.0, 52.0, 45.0, 45.0)),
        ],
        Preset::SideBySide => vec![
            Slot::image(Rect::new(3.0, 5.0, 45.0, 90.0)),
            Slot::image(Rect::new(52.0, 5.0, 45.0, 90.0)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_produce_contained_rects() {
        for preset in [
            Preset::FullPage,
            Preset::PhotoText,
            Preset::Collage2x2,
            Preset::SideBySide,
        ] {
            for slot in preset_slots(preset) {
                let rect = slot.rect.unwrap();
                assert_eq!(rect, rect.normalized());
            }
        }
    }

    #[test]
    fn test_collage_has_four_images() {
        assert_eq!(preset_slots(Preset::Collage2x2).len(), 4);
    }
}
