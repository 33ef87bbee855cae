//! Flat render items emitted to rendering pipelines

use page_model::{PageId, Rect, SlotId, SlotSettings, SlotType};
use serde::{Deserialize, Serialize};

/// One slot joined with its page content, ready to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSlot {
    pub id: SlotId,
    pub kind: SlotType,
    /// Absolute geometry in page percent. `None` for grid-governed slots:
    /// the renderer resolves those from the layout's grid hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rect: Option<Rect>,
    pub rotation: f64,
    pub opacity: f64,
    pub border_radius: f64,
    /// Content reference from the page, falling back to the slot's seed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Effective visual settings for this page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<SlotSettings>,
}

/// A fully resolved page, slots in paint order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPage {
    pub page_id: PageId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    pub slots: Vec<ResolvedSlot>,
}

/// Both sides of a spread, each resolved independently so a dangling
/// layout reference on one page cannot take down the other
#[derive(Debug)]
pub struct ResolvedSpread {
    pub left: crate::Result<ResolvedPage>,
    pub right: crate::Result<ResolvedPage>,
}
