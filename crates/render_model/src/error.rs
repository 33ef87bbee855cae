//! Error types for render-model conversion

use page_model::LayoutId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderModelError {
    /// A page references a layout id absent from the catalog. Fatal for
    /// that page only: the renderer shows a placeholder instead of
    /// crashing the whole view.
    #[error("layout not found: {0}")]
    LayoutNotFound(LayoutId),
}

pub type Result<T> = std::result::Result<T, RenderModelError>;
