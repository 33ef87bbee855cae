//! Store - persistence for layout templates
//!
//! Templates persist as versioned pretty-printed JSON documents. Loading
//! always renormalizes every slot rect and validates the template, so
//! invariant drift in externally-stored files is repaired at the door.

mod error;
mod format;
mod templates;

pub use error::*;
pub use format::*;
pub use templates::*;

use page_model::LayoutTemplate;

/// Serialize a template to the versioned on-disk document
pub fn serialize(template: &LayoutTemplate) -> Result<String> {
    let file = TemplateFile::new(template.clone());
    Ok(serde_json::to_string_pretty(&file)?)
}

/// Deserialize a template document, repairing slot geometry on the way in
pub fn deserialize(json: &str) -> Result<LayoutTemplate> {
    let file: TemplateFile = serde_json::from_str(json)?;
    if !file.header.is_valid() {
        return Err(StoreError::InvalidFormat(format!(
            "bad magic or unsupported version {}",
            file.header.version
        )));
    }
    let template = file.template.normalized();
    template
        .validate()
        .map_err(|e| StoreError::InvalidFormat(e.to_string()))?;
    Ok(template)
}
