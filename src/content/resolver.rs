use crate::content::document::ContentDocument;
use crate::content::item::ContentItem;
use serde::Serialize;

/// Reserved fallback city key.
pub const GENERAL: &str = "General";

/// Which branch of the fallback chain produced a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Origin {
    /// The requested city has its own bucket under the menu item.
    CitySpecific,
    /// The city is missing; the `"General"` bucket answered instead.
    GeneralFallback,
    /// The menu item itself is unknown. The city is never consulted.
    MenuItemMissing,
    /// The menu item exists but has neither the city nor a `"General"` bucket.
    NoContent,
}

impl Origin {
    /// True for the two branches that produce no items.
    pub fn is_miss(&self) -> bool {
        matches!(self, Origin::MenuItemMissing | Origin::NoContent)
    }
}

/// Outcome of a content lookup: the items to render plus where they came from.
///
/// The items are borrowed from the document verbatim — same order, no
/// deduplication, no copies.
#[derive(Debug, Clone, Copy)]
pub struct Resolution<'a> {
    items: &'a [ContentItem],
    origin: Origin,
}

impl<'a> Resolution<'a> {
    pub(crate) fn miss(origin: Origin) -> Self {
        Self { items: &[], origin }
    }

    pub fn items(&self) -> &'a [ContentItem] {
        self.items
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ContentDocument {
    /// Resolve the content to present for a menu item and city.
    ///
    /// The fallback chain, in order:
    ///
    /// 1. unknown menu item → empty, [`Origin::MenuItemMissing`];
    /// 2. city bucket present → that sequence, [`Origin::CitySpecific`];
    /// 3. `"General"` bucket present → that sequence, [`Origin::GeneralFallback`];
    /// 4. neither → empty, [`Origin::NoContent`].
    ///
    /// City-specific content always wins over `"General"`. Misses are not
    /// errors: they are reported through the origin and a log record, and
    /// this function never fails.
    pub fn lookup(&self, menu_item: &str, city: &str) -> Resolution<'_> {
        let bucket = match self.menu_bucket(menu_item) {
            Some(bucket) => bucket,
            None => {
                log::warn!("menu item not found: {:?}", menu_item);
                return Resolution::miss(Origin::MenuItemMissing);
            }
        };
        if let Some(items) = bucket.get(city) {
            return Resolution {
                items,
                origin: Origin::CitySpecific,
            };
        }
        if let Some(items) = bucket.get(GENERAL) {
            log::debug!(
                "no {:?} content under {:?}, falling back to {:?}",
                city,
                menu_item,
                GENERAL
            );
            return Resolution {
                items,
                origin: Origin::GeneralFallback,
            };
        }
        log::warn!("no content for menu item {:?} in city {:?}", menu_item, city);
        Resolution::miss(Origin::NoContent)
    }

    /// Resolve to the item sequence alone: empty on any miss.
    pub fn resolve(&self, menu_item: &str, city: &str) -> &[ContentItem] {
        self.lookup(menu_item, city).items
    }
}
