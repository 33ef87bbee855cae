//! Crop-anchor drag for image content inside a slot
//!
//! Dragging the image inside its slot pans the crop anchor. The delta is
//! inverted (dragging the image right reveals content to the left) and
//! scaled by the slot's rendered pixel size, then clamped to 0-100 per
//! axis.

use crate::PointerPos;
use page_model::{CropPosition, Slot, SlotId, SlotType};

/// An active crop-anchor drag over one image slot
#[derive(Debug, Clone)]
pub struct CropDrag {
    slot_id: SlotId,
    origin: PointerPos,
    start: CropPosition,
    slot_width_px: f64,
    slot_height_px: f64,
}

impl CropDrag {
    /// Start panning the image inside `slot`. Requires an unlocked image
    /// slot that actually has content to pan; `slot_width_px`/`slot_height_px`
    /// is the slot's rendered size.
    pub fn begin(
        slot: &Slot,
        origin: PointerPos,
        slot_width_px: f64,
        slot_height_px: f64,
    ) -> Option<Self> {
        if slot.locked || slot.kind != SlotType::Image || slot.default_content.is_none() {
            return None;
        }
        Some(Self {
            slot_id: slot.id.clone(),
            origin,
            start: slot.default_content_position.unwrap_or_default(),
            slot_width_px,
            slot_height_px,
        })
    }

    pub fn slot_id(&self) -> &SlotId {
        &self.slot_id
    }

    /// Crop anchor for the current pointer position
    pub fn update(&self, pointer: PointerPos) -> CropPosition {
        let delta_x = -(pointer.x - self.origin.x) / self.slot_width_px * 100.0;
        let delta_y = -(pointer.y - self.origin.y) / self.slot_height_px * 100.0;
        CropPosition {
            x: (self.start.x + delta_x).clamp(0.0, 100.0),
            y: (self.start.y + delta_y).clamp(0.0, 100.0),
        }
    }
}
