//! The guide's static menu catalog.
//!
//! Menu-entry titles double as the menu-item keys of the content document,
//! so the catalog is the authoritative list of topics the guide can show.

use serde::Serialize;

/// One selectable entry in the guide menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub title: &'static str,
    /// Symbolic icon name used by presentation layers.
    pub icon: &'static str,
}

/// A titled group of menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuSection {
    pub title: &'static str,
    pub entries: &'static [MenuEntry],
}

/// The menu item selected when the guide opens.
pub const DEFAULT_MENU_ITEM: &str = "Arriving in Nepal";

/// The catalog the guide ships with.
pub const SECTIONS: &[MenuSection] = &[
    MenuSection {
        title: "Getting Started",
        entries: &[
            MenuEntry { title: "Arriving in Nepal", icon: "airplane.arrival" },
            MenuEntry { title: "Accommodation", icon: "house" },
            MenuEntry { title: "Getting Around", icon: "car" },
        ],
    },
    MenuSection {
        title: "Food and Drink",
        entries: &[
            MenuEntry { title: "Local Cuisine", icon: "fork.knife" },
            MenuEntry { title: "Continental Cuisine", icon: "globe" },
            MenuEntry { title: "Street Food", icon: "cart" },
        ],
    },
    MenuSection {
        title: "Sightseeing and Activities",
        entries: &[
            MenuEntry { title: "Trekking and Hiking", icon: "figure.walk" },
        ],
    },
    MenuSection {
        title: "Shopping",
        entries: &[
            MenuEntry { title: "Handicrafts", icon: "scissors" },
            MenuEntry { title: "Souvenirs", icon: "gift" },
            MenuEntry { title: "Local Markets", icon: "cart.fill" },
        ],
    },
    MenuSection {
        title: "Practical Information",
        entries: &[
            MenuEntry { title: "Safety and Health", icon: "cross.case" },
            MenuEntry { title: "Money Matters", icon: "banknote" },
            MenuEntry { title: "Local Etiquette and Customs", icon: "person.fill.questionmark" },
            MenuEntry { title: "Language and Communication", icon: "message" },
            MenuEntry { title: "Travel Tips and Resources", icon: "book" },
        ],
    },
];

/// Every entry title, in catalog order.
pub fn entry_titles() -> impl Iterator<Item = &'static str> {
    SECTIONS
        .iter()
        .flat_map(|section| section.entries)
        .map(|entry| entry.title)
}

/// Find an entry by its exact title.
pub fn find_entry(title: &str) -> Option<&'static MenuEntry> {
    SECTIONS
        .iter()
        .flat_map(|section| section.entries)
        .find(|entry| entry.title == title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        assert_eq!(SECTIONS.len(), 5);
        assert_eq!(entry_titles().count(), 15);
    }

    #[test]
    fn test_default_menu_item_is_in_catalog() {
        assert!(find_entry(DEFAULT_MENU_ITEM).is_some());
    }

    #[test]
    fn test_find_entry_is_case_sensitive() {
        assert!(find_entry("Handicrafts").is_some());
        assert!(find_entry("handicrafts").is_none());
    }

    #[test]
    fn test_titles_are_unique() {
        let mut titles: Vec<&str> = entry_titles().collect();
        titles.sort_unstable();
        let before = titles.len();
        titles.dedup();
        assert_eq!(titles.len(), before);
    }
}
