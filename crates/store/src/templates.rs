//! Directory-backed template library
//!
//! User-created templates live one file per template under a root
//! directory. Built-in templates never touch disk, so the store only ever
//! holds custom entries - and refuses to remove anything that claims
//! otherwise.

use crate::{Result, StoreError, FILE_EXTENSION};
use page_model::{LayoutId, LayoutTemplate};
use std::path::{Path, PathBuf};

/// CRUD over the user template directory
#[derive(Debug, Clone)]
pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &LayoutId) -> PathBuf {
        self.root.join(format!("{}.{}", id, FILE_EXTENSION))
    }

    /// Save a template, creating the library directory on first use
    pub fn save(&self, template: &LayoutTemplate) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        let json = crate::serialize(template)?;
        std::fs::write(self.path_for(&template.id), json)?;
        tracing::debug!(template = %template.id, "saved template");
        Ok(())
    }

    /// Load one template by id
    pub fn load(&self, id: &LayoutId) -> Result<LayoutTemplate> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(StoreError::TemplateNotFound(id.to_string()));
        }
        let json = std::fs::read_to_string(path)?;
        crate::deserialize(&json)
    }

    /// Load every readable template in the library, sorted by name.
    /// Unreadable entries are skipped with a warning rather than failing
    /// the whole listing.
    pub fn list(&self) -> Result<Vec<LayoutTemplate>> {
        let mut templates = Vec::new();
        if !self.root.exists() {
            return Ok(templates);
        }
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(FILE_EXTENSION) {
                continue;
            }
            match std::fs::read_to_string(&path).map_err(StoreError::from).and_then(|json| crate::deserialize(&json)) {
                Ok(template) => templates.push(template),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable template");
                }
            }
        }
        templates.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(templates)
    }

    /// Remove a user-created template. Built-in (non-custom) templates are
    /// never removable.
    pub fn remove(&self, id: &LayoutId) -> Result<()> {
        let template = self.load(id)?;
        if !template.is_custom {
            return Err(StoreError::BuiltinTemplate(id.to_string()));
        }
        std::fs::remove_file(self.path_for(id))?;
        tracing::debug!(template = %id, "removed template");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use page_model::{Rect, Slot};
    use tempfile::TempDir;

    fn sample_template(name: &str) -> LayoutTemplate {
        let mut template = LayoutTemplate::new(name);
        template.slots.push(Slot::image(Rect::new(5.0, 5.0, 90.0, 60.0)));
        template.slots.push(Slot::text(Rect::new(10.0, 70.0, 80.0, 25.0)));
        template
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = TemplateStore::new(dir.path());
        let template = sample_template("mine");
        store.save(&template).unwrap();
        let loaded = store.load(&template.id).unwrap();
        assert_eq!(loaded, template);
    }

    #[test]
    fn test_load_missing_template_fails() {
        let dir = TempDir::new().unwrap();
        let store = TemplateStore::new(dir.path());
        assert!(matches!(
            store.load(&LayoutId::from("nope")),
            Err(StoreError::TemplateNotFound(_))
        ));
    }

    #[test]
    fn test_list_sorts_by_name_and_skips_garbage() {
        let dir = TempDir::new().unwrap();
        let store = TemplateStore::new(dir.path());
        store.save(&sample_template("zebra")).unwrap();
        store.save(&sample_template("aardvark")).unwrap();
        std::fs::write(
            dir.path().join(format!("broken.{}", FILE_EXTENSION)),
            "not json at all",
        )
        .unwrap();
        std::fs::write(dir.path().join("ignored.txt"), "other file").unwrap();

        let names: Vec<String> = store.list().unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["aardvark", "zebra"]);
    }

    #[test]
    fn test_remove_refuses_builtin_templates() {
        let dir = TempDir::new().unwrap();
        let store = TemplateStore::new(dir.path());
        let mut template = sample_template("legacy");
        template.is_custom = false;
        store.save(&template).unwrap();
        assert!(matches!(
            store.remove(&template.id),
            Err(StoreError::BuiltinTemplate(_))
        ));
        assert!(store.load(&template.id).is_ok());
    }

    #[test]
    fn test_remove_deletes_custom_template() {
        let dir = TempDir::new().unwrap();
        let store = TemplateStore::new(dir.path());
        let template = sample_template("mine");
        store.save(&template).unwrap();
        store.remove(&template.id).unwrap();
        assert!(matches!(
            store.load(&template.id),
            Err(StoreError::TemplateNotFound(_))
        ));
    }

    #[test]
    fn test_list_on_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = TemplateStore::new(dir.path().join("never-created"));
        assert!(store.list().unwrap().is_empty());
    }
}
