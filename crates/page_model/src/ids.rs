//! Identifier newtypes for slots, layouts, pages, and spreads

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a slot within its owning layout.
///
/// String-backed: built-in library layouts carry short stable ids ("s1",
/// "t1") that must survive serialization unchanged, while user-created
/// slots get generated UUID ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(String);

impl SlotId {
    /// Create a new random slot id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SlotId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SlotId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a layout template.
///
/// String-backed for the same reason as [`SlotId`]: the built-in library
/// uses semantic ids ("full_photo") that pages reference by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutId(String);

impl LayoutId {
    /// Create a new random layout id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LayoutId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for LayoutId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for LayoutId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageId(Uuid);

impl PageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a spread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpreadId(Uuid);

impl SpreadId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SpreadId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SpreadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
