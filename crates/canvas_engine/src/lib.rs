//! Canvas Engine - snap guides and pointer-drag transforms
//!
//! Pure geometry computation for the interactive canvas: candidate
//! alignment guides derived from sibling slots, and drag sessions that
//! interpret pointer movement as move/resize/rotate transforms. No
//! rendering and no event loop; the orchestrating editor feeds pointer
//! positions in and applies the resulting geometry to its model.

mod crop;
mod drag;
mod snap;

pub use crop::*;
pub use drag::*;
pub use snap::*;
