//! The layout designer - slot CRUD, alignment, distribution, and drag
//! orchestration over a single layout template

use crate::{
    preset_slots, resolve_shortcut, DesignerAction, Key, MeasurementProvider, Modifiers,
    NudgeDirection, Preset,
};
use canvas_engine::{
    collect_snap_lines, ActiveGuides, CanvasSize, CropDrag, DragKind, DragSession, PointerPos,
};
use history::History;
use page_model::{
    normalize_rect, CropPosition, LayoutTemplate, Rect, Slot, SlotId, SlotSettings, SlotType,
};

/// Snapshot bound for designer undo history
const HISTORY_CAPACITY: usize = 30;

/// Offset applied to a duplicated slot so the clone never sits exactly on
/// top of the original
const DUPLICATE_OFFSET_PERCENT: f64 = 2.0;

/// Rect every freshly added slot starts with
const DEFAULT_SLOT_RECT: Rect = Rect::new(25.0, 25.0, 50.0, 40.0);

/// Which end of the paint order a slot moves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerDirection {
    /// Topmost: end of the slot array
    Front,
    /// Bottommost: start of the slot array
    Back,
}

/// Edge or center line a slot aligns to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignEdge {
    Left,
    CenterX,
    Right,
    Top,
    CenterY,
    Bottom,
}

/// Distribution axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Partial update merged into a slot by [`LayoutDesigner::update_slot`].
/// Only the present fields change.
#[derive(Debug, Clone, Default)]
pub struct SlotPatch {
    pub rect: Option<Rect>,
    pub rotation: Option<f64>,
    pub opacity: Option<f64>,
    pub border_radius: Option<f64>,
    pub locked: Option<bool>,
    pub placeholder: Option<String>,
    pub default_content: Option<String>,
    pub default_content_position: Option<CropPosition>,
    pub default_settings: Option<SlotSettings>,
}

/// The template-designer state machine.
///
/// Owns its undo history exclusively; no two designers share one. Discrete
/// operations record one history step each. Drag gestures update through
/// the history's `replace` path every frame and commit exactly once on
/// gesture end.
pub struct LayoutDesigner {
    history: History<LayoutTemplate>,
    active_slot_id: Option<SlotId>,
    drag: Option<DragSession>,
    crop_drag: Option<CropDrag>,
    guides: ActiveGuides,
    snap_enabled: bool,
    show_grid: bool,
    zoom: u32,
}

impl LayoutDesigner {
    /// Create a designer over a fresh empty layout
    pub fn new() -> Self {
        Self::with_layout(LayoutTemplate::new("Untitled layout"))
    }

    /// Create a designer over an existing layout (renormalized on load)
    pub fn with_layout(layout: LayoutTemplate) -> Self {
        Self {
            history: History::with_capacity(layout.normalized(), HISTORY_CAPACITY),
            active_slot_id: None,
            drag: None,
            crop_drag: None,
            guides: ActiveGuides::default(),
            snap_enabled: true,
            show_grid: true,
            zoom: 100,
        }
    }

    // --- Accessors ---

    /// The layout being edited
    pub fn layout(&self) -> &LayoutTemplate {
        self.history.current()
    }

    pub fn active_slot_id(&self) -> Option<&SlotId> {
        self.active_slot_id.as_ref()
    }

    /// The selected slot, if it still exists in the layout
    pub fn active_slot(&self) -> Option<&Slot> {
        self.active_slot_id
            .as_ref()
            .and_then(|id| self.layout().slot(id))
    }

    pub fn set_active_slot(&mut self, id: Option<SlotId>) {
        self.active_slot_id = id;
    }

    /// Guide lines hit by the current drag frame
    pub fn guides(&self) -> &ActiveGuides {
        &self.guides
    }

    pub fn snap_enabled(&self) -> bool {
        self.snap_enabled
    }

    pub fn set_snap_enabled(&mut self, enabled: bool) {
        self.snap_enabled = enabled;
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub fn set_show_grid(&mut self, show: bool) {
        self.show_grid = show;
    }

    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: u32) {
        self.zoom = zoom;
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

    /// Record the current layout as one undoable step. Discrete controls
    /// call this after a sequence of provisional [`update_slot`] calls.
    ///
    /// [`update_slot`]: LayoutDesigner::update_slot
    pub fn commit_edit(&mut self) {
        self.history.commit();
    }

    // --- Slot CRUD ---

    /// Append a new slot with the default centered rect and select it
    pub fn add_slot(&mut self, kind: SlotType) {
        let slot = Slot::new(kind, DEFAULT_SLOT_RECT);
        let id = slot.id.clone();
        let mut layout = self.layout().clone();
        layout.slots.push(slot);
        self.history.set(layout);
        self.active_slot_id = Some(id);
    }

    /// Remove a slot and clear the selection
    pub fn remove_slot(&mut self, id: &SlotId) {
        let mut layout = self.layout().clone();
        layout.slots.retain(|s| &s.id != id);
        self.history.set(layout);
        self.active_slot_id = None;
    }

    /// Clone a slot, offset slightly so the copy is visible, and select it
    pub fn duplicate_slot(&mut self, id: &SlotId) {
        let Some(source) = self.layout().slot(id) else { return };
        let mut copy = source.clone();
        copy.id = SlotId::generate();
        if let Some(rect) = copy.rect {
            copy.rect = Some(normalize_rect(Rect {
                x: rect.x + DUPLICATE_OFFSET_PERCENT,
                y: rect.y + DUPLICATE_OFFSET_PERCENT,
                ..rect
            }));
        }
        let copy_id = copy.id.clone();
        let mut layout = self.layout().clone();
        layout.slots.push(copy);
        self.history.set(layout);
        self.active_slot_id = Some(copy_id);
    }

    /// Merge a partial change into a slot. Provisional (`replace`
    /// semantics): continuous controls call this per tick and finish with
    /// [`commit_edit`](LayoutDesigner::commit_edit).
    pub fn update_slot(&mut self, id: &SlotId, patch: SlotPatch) {
        let mut layout = self.layout().clone();
        let Some(slot) = layout.slot_mut(id) else { return };
        if let Some(rect) = patch.rect {
            slot.rect = Some(normalize_rect(rect));
        }
        if let Some(rotation) = patch.rotation {
            slot.rotation = rotation;
        }
        if let Some(opacity) = patch.opacity {
            slot.opacity = opacity;
        }
        if let Some(border_radius) = patch.border_radius {
            slot.border_radius = border_radius;
        }
        if let Some(locked) = patch.locked {
            slot.locked = locked;
        }
        if let Some(placeholder) = patch.placeholder {
            slot.placeholder = Some(placeholder);
        }
        if let Some(content) = patch.default_content {
            slot.default_content = Some(content);
        }
        if let Some(position) = patch.default_content_position {
            slot.default_content_position = Some(position);
        }
        if let Some(settings) = patch.default_settings {
            slot.default_settings = Some(settings);
        }
        self.history.replace(layout);
    }

    /// Move the active slot to the front or back of the paint order
    pub fn move_layer(&mut self, direction: LayerDirection) {
        let Some(id) = self.active_slot_id.clone() else { return };
        let mut layout = self.layout().clone();
        let Some(index) = layout.slot_index(&id) else { return };
        let slot = layout.slots.remove(index);
        match direction {
            LayerDirection::Front => layout.slots.push(slot),
            LayerDirection::Back => layout.slots.insert(0, slot),
        }
        self.history.set(layout);
    }

    // --- Alignment & distribution ---

    /// Align the active slot to a page edge or center line. Locked slots
    /// are immune.
    pub fn align_active(&mut self, edge: AlignEdge) {
        self.with_active_rect(|rect, _| match edge {
            AlignEdge::Left => rect.x = 0.0,
            AlignEdge::CenterX => rect.x = (100.0 - rect.w) / 2.0,
            AlignEdge::Right => rect.x = 100.0 - rect.w,
            AlignEdge::Top => rect.y = 0.0,
            AlignEdge::CenterY => rect.y = (100.0 - rect.h) / 2.0,
            AlignEdge::Bottom => rect.y = 100.0 - rect.h,
        });
    }

    /// Center the active slot on both axes
    pub fn center_active(&mut self) {
        self.with_active_rect(|rect, _| {
            rect.x = (100.0 - rect.w) / 2.0;
            rect.y = (100.0 - rect.h) / 2.0;
        });
    }

    /// Stretch the active slot to the full page and reset its rotation
    pub fn reset_active_to_full(&mut self) {
        self.with_active_rect(|rect, rotation| {
            *rect = Rect::FULL_PAGE;
            *rotation = 0.0;
        });
    }

    /// Nudge the active slot by `amount` percent, clamped to the page
    pub fn move_active_by_arrow(&mut self, direction: NudgeDirection, amount: f64) {
        self.with_active_rect(|rect, _| match direction {
            NudgeDirection::Left => rect.x = (rect.x - amount).max(0.0),
            NudgeDirection::Right => rect.x = (rect.x + amount).min(100.0 - rect.w),
            NudgeDirection::Up => rect.y = (rect.y - amount).max(0.0),
            NudgeDirection::Down => rect.y = (rect.y + amount).min(100.0 - rect.h),
        });
    }

    /// Apply a closure to the active slot's rect and rotation, then record
    /// one history step. No-op when nothing is selected, the slot has no
    /// free-form rect, or the slot is locked.
    fn with_active_rect(&mut self, f: impl FnOnce(&mut Rect, &mut f64)) {
        let Some(id) = self.active_slot_id.clone() else { return };
        let mut layout = self.layout().clone();
        let Some(slot) = layout.slot_mut(&id) else { return };
        if slot.locked {
            return;
        }
        let Some(mut rect) = slot.rect else { return };
        let mut rotation = slot.rotation;
        f(&mut rect, &mut rotation);
        slot.rect = Some(normalize_rect(rect));
        slot.rotation = rotation;
        self.history.set(layout);
    }

    /// Space slots evenly along an axis. The first and last slot (sorted
    /// by position) stay anchored; the slots between them move so every
    /// gap is equal. No-op below 3 slots with free-form geometry.
    pub fn distribute(&mut self, axis: Axis) {
        let layout = self.layout().clone();
        let mut sorted: Vec<&Slot> = layout.slots.iter().filter(|s| s.rect.is_some()).collect();
        if sorted.len() < 3 {
            return;
        }
        sorted.sort_by(|a, b| {
            let (pa, pb) = match axis {
                Axis::Horizontal => (a.rect.unwrap().x, b.rect.unwrap().x),
                Axis::Vertical => (a.rect.unwrap().y, b.rect.unwrap().y),
            };
            pa.partial_cmp(&pb).unwrap_or(std::cmp::Ordering::Equal)
        });

        let first = sorted.first().unwrap().rect.unwrap();
        let last = sorted.last().unwrap().rect.unwrap();
        let (span, total_size) = match axis {
            Axis::Horizontal => (
                last.right() - first.x,
                sorted.iter().map(|s| s.rect.unwrap().w).sum::<f64>(),
            ),
            Axis::Vertical => (
                last.bottom() - first.y,
                sorted.iter().map(|s| s.rect.unwrap().h).sum::<f64>(),
            ),
        };
        let gap = (span - total_size) / (sorted.len() - 1) as f64;

        let mut cursor = match axis {
            Axis::Horizontal => first.x,
            Axis::Vertical => first.y,
        };
        let mut positions = Vec::with_capacity(sorted.len());
        for slot in &sorted {
            positions.push((slot.id.clone(), cursor));
            cursor += match axis {
                Axis::Horizontal => slot.rect.unwrap().w,
                Axis::Vertical => slot.rect.unwrap().h,
            } + gap;
        }

        let mut layout = layout;
        for (id, position) in positions {
            if let Some(slot) = layout.slot_mut(&id) {
                if let Some(mut rect) = slot.rect {
                    match axis {
                        Axis::Horizontal => rect.x = position,
                        Axis::Vertical => rect.y = position,
                    }
                    slot.rect = Some(normalize_rect(rect));
                }
            }
        }
        self.history.set(layout);
    }

    // --- Presets ---

    /// Replace the whole slot list with a preset arrangement and select
    /// the first slot
    pub fn apply_preset(&mut self, preset: Preset) {
        let slots = preset_slots(preset);
        let first_id = slots.first().map(|s| s.id.clone());
        let mut layout = self.layout().clone();
        layout.slots = slots;
        self.history.set(layout);
        self.active_slot_id = first_id;
        tracing::debug!(?preset, "applied preset");
    }

    // --- Layout lifecycle ---

    /// Load an existing layout for editing (rects renormalized)
    pub fn load_layout(&mut self, layout: &LayoutTemplate) {
        self.history.set(layout.normalized());
    }

    /// Start over with a fresh empty layout
    pub fn start_new_layout(&mut self) {
        self.history.set(LayoutTemplate::new("Untitled layout"));
        self.active_slot_id = None;
    }

    /// Rename the layout
    pub fn set_layout_name(&mut self, name: impl Into<String>) {
        let mut layout = self.layout().clone();
        layout.name = name.into();
        self.history.set(layout);
    }

    /// Set or clear the layout background image
    pub fn set_background_image(&mut self, url: Option<String>) {
        let mut layout = self.layout().clone();
        layout.background_image = url;
        self.history.set(layout);
    }

    /// Set a slot's seed content as one undoable step
    pub fn set_slot_default_content(&mut self, id: &SlotId, content: impl Into<String>) {
        self.update_slot(
            id,
            SlotPatch {
                default_content: Some(content.into()),
                ..Default::default()
            },
        );
        self.history.commit();
    }

    /// Give every grid-governed slot an equivalent absolute rect measured
    /// by the presentation layer, and mark the layout free-form. Slots the
    /// provider cannot measure are left grid-governed.
    pub fn convert_to_custom(&mut self, provider: &dyn MeasurementProvider) {
        let mut layout = self.layout().clone();
        for slot in &mut layout.slots {
            if slot.rect.is_none() {
                if let Some(bounds) = provider.slot_bounds(&slot.id) {
                    slot.rect = Some(normalize_rect(bounds));
                }
            }
        }
        layout.is_custom = true;
        layout.grid_config = None;
        self.history.set(layout);
        tracing::debug!(layout = %self.layout().id, "converted layout to free-form geometry");
    }

    // --- Drag orchestration ---

    /// Start a drag gesture over a slot. Selects the slot (unless locking
    /// rejects the gesture) and returns whether a session actually began.
    pub fn begin_drag(&mut self, id: &SlotId, kind: DragKind, origin: PointerPos) -> bool {
        let Some(slot) = self.layout().slot(id).cloned() else { return false };
        if slot.locked && kind != DragKind::Rotate {
            return false;
        }
        self.active_slot_id = Some(id.clone());
        self.drag = DragSession::begin(&slot, kind, origin);
        self.drag.is_some()
    }

    /// Apply one pointer-move frame of the active drag. Geometry is
    /// recomputed from the drag-start state and applied provisionally.
    pub fn drag_to(&mut self, pointer: PointerPos, canvas: CanvasSize) {
        let Some(session) = &self.drag else { return };
        let layout = self.layout();
        let lines = self
            .snap_enabled
            .then(|| collect_snap_lines(&layout.slots, session.slot_id()));
        let update = session.update(pointer, canvas, lines.as_ref());

        let slot_id = session.slot_id().clone();
        let mut layout = layout.clone();
        if let Some(slot) = layout.slot_mut(&slot_id) {
            slot.rect = Some(update.rect);
            slot.rotation = update.rotation;
        }
        self.history.replace(layout);
        self.guides = update.guides;
    }

    /// Start panning an image slot's crop anchor
    pub fn begin_crop_drag(
        &mut self,
        id: &SlotId,
        origin: PointerPos,
        slot_width_px: f64,
        slot_height_px: f64,
    ) -> bool {
        let Some(slot) = self.layout().slot(id).cloned() else { return false };
        self.crop_drag = CropDrag::begin(&slot, origin, slot_width_px, slot_height_px);
        self.crop_drag.is_some()
    }

    /// Apply one pointer-move frame of the active crop drag
    pub fn crop_drag_to(&mut self, pointer: PointerPos) {
        let Some(session) = &self.crop_drag else { return };
        let position = session.update(pointer);
        let slot_id = session.slot_id().clone();
        let mut layout = self.layout().clone();
        if let Some(slot) = layout.slot_mut(&slot_id) {
            slot.default_content_position = Some(position);
        }
        self.history.replace(layout);
    }

    /// Pointer-up: finalize whatever gesture is active as a single
    /// undoable step. Unconditional; there is no separate cancel path.
    pub fn end_drag(&mut self) {
        if self.drag.take().is_some() {
            self.history.commit();
            self.guides = ActiveGuides::default();
        }
        if self.crop_drag.take().is_some() {
            self.history.commit();
        }
    }

    // --- Keyboard ---

    /// Handle a key event according to the canvas shortcut table
    pub fn handle_key(&mut self, key: Key, mods: Modifiers, text_input_focused: bool) {
        match resolve_shortcut(key, mods, text_input_focused) {
            Some(DesignerAction::Deselect) => self.active_slot_id = None,
            Some(DesignerAction::RemoveActive) => {
                if let Some(id) = self.active_slot_id.clone() {
                    self.remove_slot(&id);
                }
            }
            Some(DesignerAction::Undo) => self.undo(),
            Some(DesignerAction::Redo) => self.redo(),
            Some(DesignerAction::DuplicateActive) => {
                if let Some(id) = self.active_slot_id.clone() {
                    self.duplicate_slot(&id);
                }
            }
            Some(DesignerAction::Nudge(direction, amount)) => {
                self.move_active_by_arrow(direction, amount);
            }
            None => {}
        }
    }
}

impl Default for LayoutDesigner {
    fn default() -> Self {
        Self::new()
    }
}
