//! Built-in layout library
//!
//! Legacy fixed-grid templates shipped with the product. Their slots carry
//! no free-form rect; placement comes from the `grid_config` hint the
//! presentation layer interprets. The template designer can convert any of
//! them to free-form geometry via a measurement provider.

use crate::{LayoutId, LayoutTemplate, Slot, SlotType};

/// Layout id every new page starts with
pub const DEFAULT_LAYOUT_ID: &str = "full_photo";

fn builtin(
    id: &str,
    name: &str,
    tags: &[&str],
    grid_config: &str,
    slots: Vec<Slot>,
) -> LayoutTemplate {
    LayoutTemplate {
        id: LayoutId::from(id),
        name: name.to_string(),
        slots,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        background_image: None,
        is_custom: false,
        grid_config: Some(grid_config.to_string()),
    }
}

/// The built-in template catalog, in picker order
pub fn builtin_layouts() -> Vec<LayoutTemplate> {
    vec![
        builtin(
            DEFAULT_LAYOUT_ID,
            "Full photo",
            &["universal", "lookbook", "memories", "travel", "year"],
            "grid grid-cols-1 grid-rows-1 p-6",
            vec![Slot::grid("s1", SlotType::Image)],
        ),
        builtin(
            "photo_top_text_bottom",
            "Story below",
            &["universal", "memories", "travel"],
            "grid grid-cols-1 grid-rows-6 gap-4 p-6",
            vec![
                Slot::grid("s1", SlotType::Image),
                Slot::grid("t1", SlotType::Text).with_placeholder("Your text..."),
            ],
        ),
        builtin(
            "photo_bottom_text_top",
            "Story above",
            &["universal", "memories", "year"],
            "grid grid-cols-1 grid-rows-6 gap-4 p-6",
            vec![
                Slot::grid("t1", SlotType::Text).with_placeholder("Enter a title..."),
                Slot::grid("s1", SlotType::Image),
            ],
        ),
        builtin(
            "two_vertical",
            "Two stacked",
            &["lookbook", "universal", "memories", "travel", "year"],
            "grid grid-cols-1 grid-rows-2 gap-4 p-6",
            vec![
                Slot::grid("s1", SlotType::Image),
                Slot::grid("s2", SlotType::Image),
            ],
        ),
        builtin(
            "three_row",
            "Three in a row",
            &["universal", "year", "memories"],
            "grid grid-cols-1 grid-rows-3 gap-4 p-6",
            vec![
                Slot::grid("s1", SlotType::Image),
                Slot::grid("s2", SlotType::Image),
                Slot::grid("s3", SlotType::Image),
            ],
        ),
        builtin(
            "four_grid",
            "2x2 grid",
            &["universal", "lookbook", "year", "travel"],
            "grid grid-cols-2 grid-rows-2 gap-4 p-6",
            vec![
                Slot::grid("s1", SlotType::Image),
                Slot::grid("s2", SlotType::Image),
                Slot::grid("s3", SlotType::Image),
                Slot::grid("s4", SlotType::Image),
            ],
        ),
        builtin(
            "collage_asym",
            "Asymmetric collage",
            &["lookbook", "travel"],
            "grid grid-cols-2 grid-rows-2 gap-2 p-6",
            vec![
                Slot::grid("s1", SlotType::Image),
                Slot::grid("s2", SlotType::Image),
                Slot::grid("s3", SlotType::Image),
            ],
        ),
        builtin(
            "photo_inset",
            "Framed inset",
            &["memories", "love"],
            "grid grid-cols-6 grid-rows-6 p-6",
            vec![Slot::grid("s1", SlotType::Image)],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_are_grid_governed() {
        for layout in builtin_layouts() {
            assert!(!layout.is_custom, "{} should be a legacy layout", layout.id);
            assert!(layout.grid_config.is_some());
            for slot in &layout.slots {
                assert!(slot.rect.is_none());
            }
        }
    }

    #[test]
    fn test_builtins_validate_and_have_unique_ids() {
        let layouts = builtin_layouts();
        for layout in &layouts {
            layout.validate().unwrap();
        }
        let mut ids: Vec<_> = layouts.iter().map(|l| l.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), layouts.len());
    }

    #[test]
    fn test_default_layout_is_in_catalog() {
        let layouts = builtin_layouts();
        assert!(layouts
            .iter()
            .any(|l| l.id == LayoutId::from(DEFAULT_LAYOUT_ID)));
    }
}
