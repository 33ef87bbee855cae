//! Pages and spreads - printable surfaces referencing a layout template
//!
//! A page stores what is actually in each slot (`content`) and how it looks
//! (`slot_settings`), keyed by slot id; the referenced layout owns the
//! geometry. A spread is a left+right page pair; a document is an ordered
//! sequence of spreads.

use crate::{LayoutId, PageId, SlotId, SlotSettings, SpreadId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Structural role of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    /// Regular editable page
    Content,
    /// The book cover (first spread's left page)
    Cover,
    /// Inside-cover page; never accepts content edits
    Flyleaf,
}

/// Which side of a spread a page sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSide {
    Left,
    Right,
}

/// One printable surface: a layout reference plus the actual per-slot
/// content and settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    pub id: PageId,
    pub layout_id: LayoutId,
    #[serde(rename = "type")]
    pub page_type: PageType,
    /// Slot id -> content reference (image URL or text)
    #[serde(default)]
    pub content: BTreeMap<SlotId, String>,
    /// Slot id -> visual settings the user changed on this page
    #[serde(default)]
    pub slot_settings: BTreeMap<SlotId, SlotSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl PageData {
    pub fn new(page_type: PageType, layout_id: LayoutId) -> Self {
        Self {
            id: PageId::new(),
            layout_id,
            page_type,
            content: BTreeMap::new(),
            slot_settings: BTreeMap::new(),
            background_color: None,
        }
    }

    /// Flyleaf pages never accept content edits
    pub fn is_flyleaf(&self) -> bool {
        self.page_type == PageType::Flyleaf
    }
}

/// A pair of facing pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spread {
    pub id: SpreadId,
    pub left_page: PageData,
    pub right_page: PageData,
}

impl Spread {
    pub fn new(left_type: PageType, right_type: PageType, layout_id: LayoutId) -> Self {
        Self {
            id: SpreadId::new(),
            left_page: PageData::new(left_type, layout_id.clone()),
            right_page: PageData::new(right_type, layout_id),
        }
    }

    pub fn page(&self, side: PageSide) -> &PageData {
        match side {
            PageSide::Left => &self.left_page,
            PageSide::Right => &self.right_page,
        }
    }

    pub fn page_mut(&mut self, side: PageSide) -> &mut PageData {
        match side {
            PageSide::Left => &mut self.left_page,
            PageSide::Right => &mut self.right_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_page_is_empty() {
        let page = PageData::new(PageType::Content, LayoutId::from("full_photo"));
        assert!(page.content.is_empty());
        assert!(page.slot_settings.is_empty());
        assert!(!page.is_flyleaf());
    }

    #[test]
    fn test_spread_side_accessors() {
        let mut spread = Spread::new(
            PageType::Cover,
            PageType::Content,
            LayoutId::from("full_photo"),
        );
        assert_eq!(spread.page(PageSide::Left).page_type, PageType::Cover);
        spread
            .page_mut(PageSide::Right)
            .content
            .insert(SlotId::from("s1"), "photo.jpg".to_string());
        assert_eq!(
            spread.right_page.content.get(&SlotId::from("s1")).map(String::as_str),
            Some("photo.jpg")
        );
    }
}
