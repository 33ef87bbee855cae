//! Layout templates - reusable slot arrangements independent of content

use crate::{LayoutId, PageModelError, Result, Slot, SlotId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A reusable arrangement of slots. Pages reference a template by id and
/// store their own content, so "where slots sit" and "what is in them"
/// stay decoupled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutTemplate {
    pub id: LayoutId,
    pub name: String,
    /// Slots in paint order: the last slot draws topmost
    #[serde(default)]
    pub slots: Vec<Slot>,
    /// Categorization tags used by the template picker
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    /// Free-form geometry (true) vs fixed-grid legacy layout (false)
    #[serde(default)]
    pub is_custom: bool,
    /// Opaque renderer hint carried by legacy fixed-grid layouts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_config: Option<String>,
}

impl LayoutTemplate {
    /// Create an empty free-form template with a generated id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: LayoutId::generate(),
            name: name.into(),
            slots: Vec::new(),
            tags: vec!["universal".to_string()],
            background_image: None,
            is_custom: true,
            grid_config: None,
        }
    }

    /// Find a slot by id
    pub fn slot(&self, id: &SlotId) -> Option<&Slot> {
        self.slots.iter().find(|s| &s.id == id)
    }

    /// Find a slot by id, mutably
    pub fn slot_mut(&mut self, id: &SlotId) -> Option<&mut Slot> {
        self.slots.iter_mut().find(|s| &s.id == id)
    }

    /// Paint-order index of a slot
    pub fn slot_index(&self, id: &SlotId) -> Option<usize> {
        self.slots.iter().position(|s| &s.id == id)
    }

    /// Copy of this template with every slot rect renormalized. This is the
    /// repair path for externally-stored geometry (persistence load).
    pub fn normalized(&self) -> LayoutTemplate {
        let mut next = self.clone();
        for slot in &mut next.slots {
            if let Some(rect) = slot.rect {
                slot.rect = Some(rect.normalized());
            }
        }
        next
    }

    /// Check structural invariants: slot ids must be unique within the
    /// template.
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for slot in &self.slots {
            if !seen.insert(&slot.id) {
                return Err(PageModelError::DuplicateSlotId(slot.id.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rect, SlotType};

    #[test]
    fn test_new_template_is_empty_and_custom() {
        let layout = LayoutTemplate::new("My layout");
        assert!(layout.slots.is_empty());
        assert!(layout.is_custom);
        assert_eq!(layout.tags, vec!["universal"]);
    }

    #[test]
    fn test_normalized_repairs_drifted_rects() {
        let mut layout = LayoutTemplate::new("drifted");
        let mut slot = Slot::image(Rect::new(10.0, 10.0, 50.0, 50.0));
        slot.rect = Some(Rect::new(-5.0, 120.0, 200.0, 50.0));
        layout.slots.push(slot);
        layout.slots.push(Slot::grid("s1", SlotType::Image));

        let repaired = layout.normalized();
        assert_eq!(repaired.slots[0].rect, Some(Rect::new(0.0, 50.0, 100.0, 50.0)));
        assert_eq!(repaired.slots[1].rect, None);
    }

    #[test]
    fn test_validate_rejects_duplicate_slot_ids() {
        let mut layout = LayoutTemplate::new("dup");
        layout.slots.push(Slot::grid("s1", SlotType::Image));
        layout.slots.push(Slot::grid("s1", SlotType::Text));
        assert!(matches!(
            layout.validate(),
            Err(PageModelError::DuplicateSlotId(_))
        ));
    }

    #[test]
    fn test_slot_index_follows_paint_order() {
        let mut layout = LayoutTemplate::new("order");
        layout.slots.push(Slot::grid("back", SlotType::Image));
        layout.slots.push(Slot::grid("front", SlotType::Image));
        assert_eq!(layout.slot_index(&SlotId::from("back")), Some(0));
        assert_eq!(layout.slot_index(&SlotId::from("front")), Some(1));
    }
}
