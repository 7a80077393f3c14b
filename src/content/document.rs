use crate::content::item::ContentItem;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors arising while loading a content document.
///
/// Both variants are fatal to the load: a document either parses and
/// validates completely or is rejected as a whole.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content document: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed content document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The full nested content mapping of a guide.
///
/// Menu-item name → city name → ordered content items. Keys are
/// case-sensitive; `"General"` is the reserved fallback city key. A missing
/// (menu item, city) pair is not an error — absence drives the fallback
/// chain in [`lookup`](ContentDocument::lookup).
///
/// # Examples
///
/// ```
/// use guidebook_engine::content::document::ContentDocument;
///
/// let doc = ContentDocument::from_json(
///     r#"{"menuItems": {"Local Cuisine": {"General": [
///         {"type": "text", "content": "Dal bhat twice a day."}
///     ]}}}"#,
/// ).unwrap();
/// assert_eq!(doc.resolve("Local Cuisine", "Pokhara").len(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentDocument {
    #[serde(rename = "menuItems")]
    menu_items: HashMap<String, HashMap<String, Vec<ContentItem>>>,
}

impl ContentDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document from JSON text.
    ///
    /// Unknown content-kind tags anywhere in the document make the whole
    /// load fail.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a document file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Insert a sequence of items under a (menu item, city) pair,
    /// replacing any existing sequence there.
    pub fn insert(
        &mut self,
        menu_item: impl Into<String>,
        city: impl Into<String>,
        items: Vec<ContentItem>,
    ) {
        self.menu_items
            .entry(menu_item.into())
            .or_default()
            .insert(city.into(), items);
    }

    /// The city buckets of one menu item, if the menu item exists.
    pub fn menu_bucket(&self, menu_item: &str) -> Option<&HashMap<String, Vec<ContentItem>>> {
        self.menu_items.get(menu_item)
    }

    /// All menu-item names, sorted.
    pub fn menu_items(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.menu_items.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// All unique city names referenced anywhere in the document, sorted.
    pub fn cities(&self) -> Vec<&str> {
        let mut cities: Vec<&str> = self
            .menu_items
            .values()
            .flat_map(|bucket| bucket.keys())
            .map(String::as_str)
            .collect();
        cities.sort_unstable();
        cities.dedup();
        cities
    }

    /// Total number of content items across all buckets.
    pub fn item_count(&self) -> usize {
        self.menu_items
            .values()
            .flat_map(|bucket| bucket.values())
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.menu_items.is_empty()
    }
}
