//! Page Editor - multi-spread document editing
//!
//! Owns one [`history::History`] over the ordered spread list plus the
//! navigation state (current spread, active side, selected slot). Content
//! edits apply a chosen layout's slot geometry to a page's content while
//! the layout itself stays untouched - "where slots sit" lives in the
//! template, "what is in them" lives here.

mod editor;
mod layout_apply;
mod spread;

pub use editor::*;
pub use layout_apply::*;
pub use spread::*;
