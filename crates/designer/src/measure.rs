//! Measurement bridge for grid-governed slots
//!
//! Converting a legacy fixed-grid layout to free-form geometry needs the
//! rendered bounding box of each grid slot, which only the presentation
//! layer can measure. The designer takes that capability as an injected
//! trait so the core stays renderer-agnostic and tests can supply a fake.

use page_model::{Rect, SlotId};

/// Supplies rendered slot bounds as percentages of the canvas container
pub trait MeasurementProvider {
    /// Bounding box of the rendered slot, in page percent. `None` when the
    /// slot is not currently rendered.
    fn slot_bounds(&self, id: &SlotId) -> Option<Rect>;
}
