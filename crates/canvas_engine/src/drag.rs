//! Pointer-drag transform sessions
//!
//! A drag session is an explicit record created on pointer-down and dropped
//! on pointer-up. Every pointer-move recomputes the full geometry from the
//! drag-start rect plus the cumulative pointer delta - never incrementally
//! from the previous frame - so dropped frames cannot accumulate error.
//! The session itself never touches the model; the orchestrator applies
//! each [`DragUpdate`] through its history's `replace` path and commits
//! once when the gesture ends.

use crate::{snap_to_lines, SnapLines, SNAP_THRESHOLD_PERCENT};
use page_model::{normalize_rect, Rect, Slot, SlotId};

/// Smallest width/height a resize can produce, in page percent
pub const MIN_SLOT_SIZE_PERCENT: f64 = 5.0;

/// What a drag gesture manipulates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    /// Translate the rect; size is unchanged
    Move,
    /// Resize from the bottom-right handle; origin is fixed
    ResizeBr,
    /// Resize from the top-left handle; bottom-right corner is fixed
    ResizeTl,
    /// Resize from the top-right handle; bottom-left corner is fixed
    ResizeTr,
    /// Resize from the bottom-left handle; top-right corner is fixed
    ResizeBl,
    /// Rotate around the rect center
    Rotate,
}

/// Pointer position in canvas pixels, relative to the canvas origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPos {
    pub x: f64,
    pub y: f64,
}

impl PointerPos {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rendered canvas size in pixels; converts pointer deltas to page percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Guide lines actually hit during a frame, for guide-line rendering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveGuides {
    pub vertical: Vec<f64>,
    pub horizontal: Vec<f64>,
}

/// Geometry produced by one pointer-move frame
#[derive(Debug, Clone, PartialEq)]
pub struct DragUpdate {
    pub rect: Rect,
    pub rotation: f64,
    pub guides: ActiveGuides,
}

/// An active drag gesture over one slot.
///
/// Captures the slot's geometry at pointer-down; all updates derive from
/// that snapshot. Pointer-up is the only termination and is unconditional.
#[derive(Debug, Clone)]
pub struct DragSession {
    slot_id: SlotId,
    kind: DragKind,
    origin: PointerPos,
    start_rect: Rect,
    start_rotation: f64,
}

impl DragSession {
    /// Start a gesture over `slot`. Returns `None` for slots without
    /// free-form geometry, and for locked slots unless the gesture is a
    /// rotation (locking blocks move/resize only).
    pub fn begin(slot: &Slot, kind: DragKind, origin: PointerPos) -> Option<Self> {
        if slot.locked && kind != DragKind::Rotate {
            return None;
        }
        let start_rect = slot.rect?;
        Some(Self {
            slot_id: slot.id.clone(),
            kind,
            origin,
            start_rect,
            start_rotation: slot.rotation,
        })
    }

    pub fn slot_id(&self) -> &SlotId {
        &self.slot_id
    }

    pub fn kind(&self) -> DragKind {
        self.kind
    }

    /// Compute the geometry for the current pointer position. Pass the
    /// sibling snap lines to enable snapping (move and bottom-right resize
    /// only; corner resizes never snap).
    pub fn update(
        &self,
        pointer: PointerPos,
        canvas: CanvasSize,
        snap: Option<&SnapLines>,
    ) -> DragUpdate {
        let dx = (pointer.x - self.origin.x) / canvas.width * 100.0;
        let dy = (pointer.y - self.origin.y) / canvas.height * 100.0;
        let start = self.start_rect;
        let mut guides = ActiveGuides::default();
        let mut rotation = self.start_rotation;

        let rect = match self.kind {
            DragKind::Move => {
                let mut raw_x = start.x + dx;
                let mut raw_y = start.y + dy;
                if let Some(lines) = snap {
                    raw_x = snap_move_axis(raw_x, start.w, &lines.vertical, &mut guides.vertical);
                    raw_y = snap_move_axis(raw_y, start.h, &lines.horizontal, &mut guides.horizontal);
                }
                Rect {
                    x: raw_x.clamp(0.0, 100.0 - start.w),
                    y: raw_y.clamp(0.0, 100.0 - start.h),
                    ..start
                }
            }
            DragKind::ResizeBr => {
                let mut raw_w = (start.w + dx).max(MIN_SLOT_SIZE_PERCENT);
                let mut raw_h = (start.h + dy).max(MIN_SLOT_SIZE_PERCENT);
                if let Some(lines) = snap {
                    let right = snap_to_lines(start.x + raw_w, &lines.vertical, SNAP_THRESHOLD_PERCENT);
                    if let Some(line) = right.line {
                        raw_w = (right.value - start.x).max(MIN_SLOT_SIZE_PERCENT);
                        guides.vertical.push(line);
                    }
                    let bottom =
                        snap_to_lines(start.y + raw_h, &lines.horizontal, SNAP_THRESHOLD_PERCENT);
                    if let Some(line) = bottom.line {
                        raw_h = (bottom.value - start.y).max(MIN_SLOT_SIZE_PERCENT);
                        guides.horizontal.push(line);
                    }
                }
                Rect {
                    w: raw_w.min(100.0 - start.x),
                    h: raw_h.min(100.0 - start.y),
                    ..start
                }
            }
            DragKind::ResizeTl => Rect {
                x: (start.x + dx).max(0.0),
                y: (start.y + dy).max(0.0),
                w: (start.w - dx).min(start.right()).max(MIN_SLOT_SIZE_PERCENT),
                h: (start.h - dy).min(start.bottom()).max(MIN_SLOT_SIZE_PERCENT),
            },
            DragKind::ResizeTr => Rect {
                x: start.x,
                y: (start.y + dy).max(0.0),
                w: (start.w + dx).min(100.0 - start.x).max(MIN_SLOT_SIZE_PERCENT),
                h: (start.h - dy).min(start.bottom()).max(MIN_SLOT_SIZE_PERCENT),
            },
            DragKind::ResizeBl => Rect {
                x: (start.x + dx).max(0.0),
                y: start.y,
                w: (start.w - dx).min(start.right()).max(MIN_SLOT_SIZE_PERCENT),
                h: (start.h + dy).min(100.0 - start.y).max(MIN_SLOT_SIZE_PERCENT),
            },
            DragKind::Rotate => {
                let center_x = start.center_x() * canvas.width / 100.0;
                let center_y = start.center_y() * canvas.height / 100.0;
                // Handle sits above the shape, so straight up reads as 0 deg
                rotation =
                    (pointer.y - center_y).atan2(pointer.x - center_x).to_degrees() + 90.0;
                start
            }
        };

        DragUpdate {
            rect: normalize_rect(rect),
            rotation,
            guides,
        }
    }
}

/// Move snapping evaluates three anchors per axis - leading edge, trailing
/// edge, and center - and applies only the globally closest match. The
/// other anchors follow by construction since size is fixed during a move.
fn snap_move_axis(raw: f64, size: f64, lines: &[f64], hit: &mut Vec<f64>) -> f64 {
    let leading = snap_to_lines(raw, lines, SNAP_THRESHOLD_PERCENT);
    let trailing = snap_to_lines(raw + size, lines, SNAP_THRESHOLD_PERCENT);
    let center = snap_to_lines(raw + size / 2.0, lines, SNAP_THRESHOLD_PERCENT);

    let d_leading = leading.line.map_or(f64::INFINITY, |_| (raw - leading.value).abs());
    let d_trailing = trailing
        .line
        .map_or(f64::INFINITY, |_| (raw + size - trailing.value).abs());
    let d_center = center
        .line
        .map_or(f64::INFINITY, |_| (raw + size / 2.0 - center.value).abs());

    let min = d_leading.min(d_trailing).min(d_center);
    if min.is_infinite() {
        return raw;
    }
    if min == d_leading {
        hit.push(leading.line.unwrap_or(leading.value));
        leading.value
    } else if min == d_trailing {
        hit.push(trailing.line.unwrap_or(trailing.value));
        trailing.value - size
    } else {
        hit.push(center.line.unwrap_or(center.value));
        center.value - size / 2.0
    }
}
