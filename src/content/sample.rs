//! Sample-document generation.
//!
//! Generates random content documents for CLI experimentation and for
//! benchmarking the resolver against documents of arbitrary size.

use crate::content::document::ContentDocument;
use crate::content::item::{ContentItem, ContentKind};
use crate::content::resolver::GENERAL;
use rand::Rng;

/// Configuration for generating a random content document.
#[derive(Debug, Clone)]
pub struct SampleConfig {
    /// Menu-item names to populate.
    pub menu_items: Vec<String>,
    /// City names beyond the `"General"` bucket.
    pub cities: Vec<String>,
    /// Number of items per generated bucket.
    pub items_per_bucket: usize,
    /// Probability that a given city gets its own bucket under a menu item.
    /// `"General"` is always present, so the fallback chain always lands.
    pub city_coverage: f64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            menu_items: crate::app::menu::entry_titles()
                .map(str::to_string)
                .collect(),
            cities: vec![
                "Kathmandu".to_string(),
                "Pokhara".to_string(),
                "Bhaktapur".to_string(),
            ],
            items_per_bucket: 4,
            city_coverage: 0.5,
        }
    }
}

/// Generate a random content document.
pub fn generate_sample_document(config: &SampleConfig) -> ContentDocument {
    let mut rng = rand::thread_rng();
    let mut doc = ContentDocument::new();

    for menu_item in &config.menu_items {
        doc.insert(menu_item, GENERAL, sample_bucket(&mut rng, config));
        for city in &config.cities {
            if rng.gen_bool(config.city_coverage.clamp(0.0, 1.0)) {
                doc.insert(menu_item, city, sample_bucket(&mut rng, config));
            }
        }
    }

    doc
}

fn sample_bucket(rng: &mut impl Rng, config: &SampleConfig) -> Vec<ContentItem> {
    (0..config.items_per_bucket.max(1))
        .map(|n| {
            let kind = ContentKind::ALL[rng.gen_range(0..ContentKind::ALL.len())];
            ContentItem::new(kind, sample_body(kind, n))
        })
        .collect()
}

fn sample_body(kind: ContentKind, n: usize) -> String {
    match kind {
        ContentKind::Text => format!("Sample tip #{} for the road.", n),
        ContentKind::Image => format!("photo-{:03}", n),
        ContentKind::Note => format!("Note {}: carry small bills.", n),
        ContentKind::Recommendation => format!("Recommendation {}: go early.", n),
        ContentKind::Table => "Item | Price\nTea | $1\nCoffee | $2".to_string(),
        ContentKind::Location => format!("27.7{}, 85.3{}", n % 10, n % 10),
        ContentKind::List => "pack light, drink bottled water, carry cash".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_document_has_general_everywhere() {
        let config = SampleConfig::default();
        let doc = generate_sample_document(&config);

        for menu_item in &config.menu_items {
            let bucket = doc.menu_bucket(menu_item).expect("menu item generated");
            assert!(bucket.contains_key(GENERAL));
        }
    }

    #[test]
    fn test_sample_document_resolves_for_any_city() {
        let config = SampleConfig::default();
        let doc = generate_sample_document(&config);

        // General always exists, so no (menu item, city) pair can miss.
        for menu_item in &config.menu_items {
            for city in &config.cities {
                assert!(!doc.resolve(menu_item, city).is_empty());
            }
        }
    }

    #[test]
    fn test_full_coverage_generates_every_city() {
        let config = SampleConfig {
            city_coverage: 1.0,
            ..Default::default()
        };
        let doc = generate_sample_document(&config);
        let bucket = doc.menu_bucket(&config.menu_items[0]).unwrap();
        assert_eq!(bucket.len(), config.cities.len() + 1);
    }
}
