//! Error types for the page model

use crate::SlotId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageModelError {
    #[error("duplicate slot id in layout: {0}")]
    DuplicateSlotId(SlotId),
}

pub type Result<T> = std::result::Result<T, PageModelError>;
