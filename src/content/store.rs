use crate::content::document::{ContentDocument, ContentError};
use crate::content::item::ContentItem;
use crate::content::resolver::{Origin, Resolution};
use std::path::Path;

/// Owns the currently loaded content document, if any.
///
/// A document load is all-or-nothing: a malformed or missing source leaves
/// the store empty until a later load succeeds. An empty store has no menu
/// items, so every lookup reports [`Origin::MenuItemMissing`] and resolves
/// to the empty slice — lookups never fail, only loads do.
#[derive(Debug, Default)]
pub struct ContentStore {
    document: Option<ContentDocument>,
}

impl ContentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a document from JSON text, replacing whatever was loaded before.
    ///
    /// On failure the store is emptied and the error returned.
    pub fn load_json(&mut self, json: &str) -> Result<(), ContentError> {
        self.install(ContentDocument::from_json(json))
    }

    /// Load a document file, replacing whatever was loaded before.
    ///
    /// On failure the store is emptied and the error returned.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<(), ContentError> {
        self.install(ContentDocument::from_path(path))
    }

    fn install(&mut self, result: Result<ContentDocument, ContentError>) -> Result<(), ContentError> {
        match result {
            Ok(document) => {
                self.document = Some(document);
                Ok(())
            }
            Err(e) => {
                log::error!("content document rejected: {}", e);
                self.document = None;
                Err(e)
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }

    pub fn document(&self) -> Option<&ContentDocument> {
        self.document.as_ref()
    }

    /// Full fallback lookup against the loaded document.
    pub fn lookup(&self, menu_item: &str, city: &str) -> Resolution<'_> {
        match &self.document {
            Some(document) => document.lookup(menu_item, city),
            None => Resolution::miss(Origin::MenuItemMissing),
        }
    }

    /// Resolve to the item sequence alone: empty on any miss.
    pub fn resolve(&self, menu_item: &str, city: &str) -> &[ContentItem] {
        self.lookup(menu_item, city).items()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{"menuItems": {
        "Money Matters": {
            "General": [{"type": "text", "content": "ATMs are common in cities."}]
        }
    }}"#;

    #[test]
    fn test_empty_store_resolves_to_nothing() {
        let store = ContentStore::new();
        assert!(!store.is_loaded());
        assert!(store.resolve("Money Matters", "General").is_empty());
        assert_eq!(
            store.lookup("Money Matters", "General").origin(),
            Origin::MenuItemMissing
        );
    }

    #[test]
    fn test_load_then_resolve() {
        let mut store = ContentStore::new();
        store.load_json(DOC).unwrap();
        assert!(store.is_loaded());
        assert_eq!(store.resolve("Money Matters", "Pokhara").len(), 1);
    }

    #[test]
    fn test_failed_load_empties_store() {
        let mut store = ContentStore::new();
        store.load_json(DOC).unwrap();

        let result = store.load_json("{broken");
        assert!(result.is_err());
        assert!(!store.is_loaded());
        assert!(store.resolve("Money Matters", "General").is_empty());
    }

    #[test]
    fn test_reload_after_failure_recovers() {
        let mut store = ContentStore::new();
        let _ = store.load_json("{broken");
        store.load_json(DOC).unwrap();
        assert!(store.is_loaded());
    }

    #[test]
    fn test_missing_file_empties_store() {
        let mut store = ContentStore::new();
        store.load_json(DOC).unwrap();
        assert!(store.load_path("/nonexistent/contentData.json").is_err());
        assert!(!store.is_loaded());
    }
}
