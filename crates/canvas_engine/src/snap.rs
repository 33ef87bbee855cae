//! Snap-to-guide computation
//!
//! Candidate guide lines come from the page edges, the page center, and
//! the near edge / far edge / center of every sibling slot along each
//! axis. A value snaps to the nearest candidate within a threshold.

use page_model::{Slot, SlotId};
use serde::{Deserialize, Serialize};

/// Snap distance in page percent
pub const SNAP_THRESHOLD_PERCENT: f64 = 1.5;

/// Candidate guide positions per axis. Vertical lines constrain x values,
/// horizontal lines constrain y values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapLines {
    pub vertical: Vec<f64>,
    pub horizontal: Vec<f64>,
}

/// Collect candidate guides from the page frame and every sibling of the
/// slot being manipulated. Siblings without free-form geometry contribute
/// nothing.
pub fn collect_snap_lines(slots: &[Slot], exclude: &SlotId) -> SnapLines {
    let mut lines = SnapLines {
        vertical: vec![0.0, 50.0, 100.0],
        horizontal: vec![0.0, 50.0, 100.0],
    };
    for slot in slots {
        if &slot.id == exclude {
            continue;
        }
        let Some(rect) = slot.rect else { continue };
        lines.vertical.push(rect.x);
        lines.vertical.push(rect.right());
        lines.vertical.push(rect.center_x());
        lines.horizontal.push(rect.y);
        lines.horizontal.push(rect.bottom());
        lines.horizontal.push(rect.center_y());
    }
    lines
}

/// Outcome of a snap attempt: the (possibly unchanged) value plus the
/// guide line that matched, for guide rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResult {
    pub value: f64,
    pub line: Option<f64>,
}

/// Snap `value` to the strictly nearest candidate within `threshold`, or
/// return it unchanged.
pub fn snap_to_lines(value: f64, lines: &[f64], threshold: f64) -> SnapResult {
    let mut best_line = None;
    let mut best_dist = threshold;
    for &line in lines {
        let d = (value - line).abs();
        if d < best_dist {
            best_dist = d;
            best_line = Some(line);
        }
    }
    SnapResult {
        value: best_line.unwrap_or(value),
        line: best_line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use page_model::{Rect, SlotType};

    #[test]
    fn test_collect_includes_page_frame_and_sibling_edges() {
        let sibling = Slot::image(Rect::new(0.0, 0.0, 50.0, 50.0));
        let dragged = Slot::image(Rect::new(60.0, 60.0, 30.0, 30.0));
        let id = dragged.id.clone();
        let lines = collect_snap_lines(&[sibling, dragged], &id);
        assert_eq!(lines.vertical, vec![0.0, 50.0, 100.0, 0.0, 50.0, 25.0]);
        assert_eq!(lines.horizontal, vec![0.0, 50.0, 100.0, 0.0, 50.0, 25.0]);
    }

    #[test]
    fn test_collect_skips_excluded_and_grid_slots() {
        let grid = Slot::grid("g", SlotType::Image);
        let dragged = Slot::image(Rect::new(10.0, 10.0, 10.0, 10.0));
        let id = dragged.id.clone();
        let lines = collect_snap_lines(&[grid, dragged], &id);
        assert_eq!(lines.vertical, vec![0.0, 50.0, 100.0]);
    }

    #[test]
    fn test_snap_picks_nearest_within_threshold() {
        let result = snap_to_lines(49.0, &[0.0, 50.0, 48.2], 1.5);
        assert_eq!(result.value, 48.2);
        assert_eq!(result.line, Some(48.2));
    }

    #[test]
    fn test_snap_outside_threshold_returns_original() {
        let result = snap_to_lines(45.0, &[0.0, 50.0, 100.0], 1.5);
        assert_eq!(result.value, 45.0);
        assert_eq!(result.line, None);
    }

    #[test]
    fn test_snap_at_exact_threshold_does_not_match() {
        // Strictly-nearest: a candidate exactly at the threshold is rejected
        let result = snap_to_lines(48.5, &[50.0], 1.5);
        assert_eq!(result.line, None);
    }
}
