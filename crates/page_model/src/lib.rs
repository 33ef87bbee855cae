//! Page Model - Core data model for pages, spreads, and layout templates
//!
//! This crate provides the foundational data model for the page-layout
//! editor: percent-space rectangle geometry with a single normalization
//! point, slots (image/text placeholders), reusable layout templates,
//! pages, and spreads. Paint order of slots is their array position in
//! the owning layout; there is no numeric z-index field.

mod error;
mod geometry;
mod ids;
mod library;
mod page;
mod slot;
mod template;

pub use error::*;
pub use geometry::*;
pub use ids::*;
pub use library::*;
pub use page::*;
pub use slot::*;
pub use template::*;
