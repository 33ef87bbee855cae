//! The page editor - spread navigation and content placement

use crate::{build_page_from_layout, create_spread, MAX_PAGES};
use history::History;
use page_model::{
    LayoutId, LayoutTemplate, PageSide, PageType, SlotId, SlotSettings, SlotType, Spread,
};

/// The slot currently selected in the editor view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedSlot {
    pub id: SlotId,
    pub side: PageSide,
    pub kind: SlotType,
}

/// The multi-spread document editor.
///
/// Owns its undo history exclusively over the whole spread list; every
/// discrete edit deep-clones the list, mutates one page, and records one
/// step. Flyleaf pages never accept edits, and the cover spread's left
/// page keeps its layout forever.
pub struct PageEditor {
    history: History<Vec<Spread>>,
    current_spread: usize,
    active_side: PageSide,
    selected_slot: Option<SelectedSlot>,
}

impl PageEditor {
    /// Create an editor with no document loaded
    pub fn new() -> Self {
        Self {
            history: History::new(Vec::new()),
            current_spread: 0,
            active_side: PageSide::Right,
            selected_slot: None,
        }
    }

    /// Load a document and reset navigation
    pub fn init(&mut self, spreads: Vec<Spread>) {
        self.history.set(spreads);
        self.current_spread = 0;
        self.active_side = PageSide::Right;
        self.selected_slot = None;
    }

    // --- Accessors & navigation ---

    pub fn spreads(&self) -> &[Spread] {
        self.history.current()
    }

    /// Addressable content pages: the first spread is the cover and the
    /// last is reserved, so they never count. Always derived, never stored.
    pub fn total_pages(&self) -> usize {
        self.spreads().len().saturating_sub(2) * 2
    }

    pub fn current_spread_index(&self) -> usize {
        self.current_spread
    }

    /// Jump to a spread, clamped to the document range
    pub fn set_current_spread(&mut self, index: usize) {
        self.current_spread = index.min(self.spreads().len().saturating_sub(1));
    }

    pub fn current_spread(&self) -> Option<&Spread> {
        self.spreads().get(self.current_spread)
    }

    pub fn active_side(&self) -> PageSide {
        self.active_side
    }

    pub fn set_active_side(&mut self, side: PageSide) {
        self.active_side = side;
    }

    pub fn selected_slot(&self) -> Option<&SelectedSlot> {
        self.selected_slot.as_ref()
    }

    pub fn set_selected_slot(&mut self, slot: Option<SelectedSlot>) {
        self.selected_slot = slot;
    }

    // --- History ---

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo(&mut self) {
        self.history.undo();
    }

    pub fn redo(&mut self) {
        self.history.redo();
    }

    // --- Content edits ---

    /// Set a slot's content on the current spread. Flyleaf pages never
    /// accept content.
    pub fn update_page_content(
        &mut self,
        side: PageSide,
        slot_id: &SlotId,
        content: impl Into<String>,
    ) {
        let mut spreads = self.spreads().to_vec();
        let Some(spread) = spreads.get_mut(self.current_spread) else { return };
        let page = spread.page_mut(side);
        if page.is_flyleaf() {
            return;
        }
        page.content.insert(slot_id.clone(), content.into());
        self.history.set(spreads);
    }

    /// Merge a settings patch into a slot on the current spread
    pub fn update_page_settings(
        &mut self,
        side: PageSide,
        slot_id: &SlotId,
        patch: &SlotSettings,
    ) {
        let mut spreads = self.spreads().to_vec();
        let Some(spread) = spreads.get_mut(self.current_spread) else { return };
        let page = spread.page_mut(side);
        if page.is_flyleaf() {
            return;
        }
        let merged = page
            .slot_settings
            .get(slot_id)
            .map(|existing| existing.merge(patch))
            .unwrap_or_else(|| patch.clone());
        page.slot_settings.insert(slot_id.clone(), merged);
        self.history.set(spreads);
    }

    /// Apply a layout to the active page, rederiving its content and
    /// settings from the layout's slot defaults. Destructive: whatever the
    /// page held before is discarded, not merged. No-op for the cover
    /// spread's left page and for flyleaves.
    pub fn select_layout(&mut self, layout_id: &LayoutId, catalog: &[LayoutTemplate]) {
        if self.current_spread == 0 && self.active_side == PageSide::Left {
            return;
        }
        let mut spreads = self.spreads().to_vec();
        let Some(spread) = spreads.get_mut(self.current_spread) else { return };
        let page = spread.page_mut(self.active_side);
        if page.is_flyleaf() {
            return;
        }

        page.layout_id = layout_id.clone();
        let layout = catalog.iter().find(|l| &l.id == layout_id);
        let (content, slot_settings) = build_page_from_layout(layout);
        page.content = content;
        page.slot_settings = slot_settings;

        self.selected_slot = None;
        self.history.set(spreads);
    }

    /// Set the active page's background color
    pub fn set_page_background(&mut self, color: impl Into<String>) {
        let mut spreads = self.spreads().to_vec();
        let Some(spread) = spreads.get_mut(self.current_spread) else { return };
        let page = spread.page_mut(self.active_side);
        if page.is_flyleaf() {
            return;
        }
        page.background_color = Some(color.into());
        self.history.set(spreads);
    }

    // --- Document structure ---

    /// Append two content spreads before the trailing reserved spread and
    /// jump to the first of them. No-op at the page cap.
    pub fn add_pages(&mut self) {
        if self.total_pages() >= MAX_PAGES {
            return;
        }
        let mut spreads = self.spreads().to_vec();
        let insert_index = spreads.len().saturating_sub(1);
        spreads.insert(insert_index, create_spread(PageType::Content, PageType::Content));
        spreads.insert(insert_index, create_spread(PageType::Content, PageType::Content));
        self.history.set(spreads);
        self.current_spread = insert_index;
        self.selected_slot = None;
        tracing::debug!(total_pages = self.total_pages(), "added a spread pair");
    }

    /// Wipe content and settings from every non-flyleaf page, one step
    pub fn clear_all_pages(&mut self) {
        let mut spreads = self.spreads().to_vec();
        for spread in &mut spreads {
            for side in [PageSide::Left, PageSide::Right] {
                let page = spread.page_mut(side);
                if !page.is_flyleaf() {
                    page.content.clear();
                    page.slot_settings.clear();
                }
            }
        }
        self.history.set(spreads);
        self.selected_slot = None;
        tracing::debug!("cleared all pages");
    }
}

impl Default for PageEditor {
    fn default() -> Self {
        Self::new()
    }
}
