//! Render Model - resolved geometry for external rendering pipelines
//!
//! Joins a page's content with its layout's slot geometry into flat,
//! serializable render items. Rasterization (to an image, PDF, or
//! anything else) is the consumer's job; this crate only resolves what
//! to draw where.

mod converter;
mod error;
mod quality;
mod render_item;

pub use converter::*;
pub use error::*;
pub use quality::*;
pub use render_item::*;
