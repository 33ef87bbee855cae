//! On-disk template document format

use chrono::{DateTime, Utc};
use page_model::LayoutTemplate;
use serde::{Deserialize, Serialize};

/// File format version
pub const FORMAT_VERSION: u32 = 1;

/// File extension for stored templates
pub const FILE_EXTENSION: &str = "bptpl";

/// File header for format identification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileHeader {
    /// Magic string for format identification
    pub magic: String,
    /// Format version
    pub version: u32,
    /// Id of the stored template
    pub template_id: String,
    /// Creation timestamp
    pub created: DateTime<Utc>,
    /// Last modified timestamp
    pub modified: DateTime<Utc>,
}

impl FileHeader {
    pub const MAGIC: &'static str = "BOOKPRESS-TPL";

    pub fn new(template_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            magic: Self::MAGIC.to_string(),
            version: FORMAT_VERSION,
            template_id: template_id.into(),
            created: now,
            modified: now,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.magic == Self::MAGIC && self.version <= FORMAT_VERSION
    }
}

/// Complete template document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateFile {
    pub header: FileHeader,
    pub template: LayoutTemplate,
}

impl TemplateFile {
    pub fn new(template: LayoutTemplate) -> Self {
        Self {
            header: FileHeader::new(template.id.to_string()),
            template,
        }
    }
}
