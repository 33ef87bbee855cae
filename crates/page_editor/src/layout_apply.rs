//! Deriving page content from a layout's slot defaults
//!
//! Applying a layout to a page is a destructive, total replacement: the
//! page's content and settings maps are rebuilt from the layout's defaults
//! and whatever the page held before is discarded.

use page_model::{ImageFit, LayoutTemplate, SlotId, SlotSettings, SlotType};
use std::collections::BTreeMap;

/// Build the content and slot-settings maps a page gets when `layout` is
/// applied. Seeds every slot's default content, and for IMAGE slots
/// presets cover-fit with the crop anchor taken from the slot's default
/// content position.
pub fn build_page_from_layout(
    layout: Option<&LayoutTemplate>,
) -> (BTreeMap<SlotId, String>, BTreeMap<SlotId, SlotSettings>) {
    let mut content = BTreeMap::new();
    let mut slot_settings = BTreeMap::new();

    let Some(layout) = layout else {
        return (content, slot_settings);
    };

    for slot in &layout.slots {
        if let Some(seed) = &slot.default_content {
            content.insert(slot.id.clone(), seed.clone());
        }
        match slot.kind {
            SlotType::Image => {
                let position = slot.default_content_position.unwrap_or_default();
                let base = SlotSettings {
                    fit: Some(ImageFit::Cover),
                    crop_x: Some(position.x),
                    crop_y: Some(position.y),
                    ..Default::default()
                };
                let settings = match &slot.default_settings {
                    Some(defaults) => base.merge(defaults),
                    None => base,
                };
                slot_settings.insert(slot.id.clone(), settings);
            }
            SlotType::Text => {
                if let Some(defaults) = &slot.default_settings {
                    slot_settings.insert(slot.id.clone(), defaults.clone());
                }
            }
        }
    }

    (content, slot_settings)
}
