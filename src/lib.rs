//! # guidebook-engine
//!
//! Offline city travel-guide content resolution and currency conversion engine.
//!
//! Given a nested content document (menu item → city → ordered content items),
//! this engine resolves what to present for a selected topic and city, falling
//! back to the reserved `"General"` bucket when a city has no entry of its own.
//! It also converts amounts against a fixed currency rate table and keeps the
//! user's theme and color preferences.
//!
//! ## Architecture
//!
//! - **content** — Content document, store lifecycle, resolver, body parsers
//! - **currency** — Currency codes, rate table, decimal conversion
//! - **theme** — Hex colors, theme preference, persisted appearance settings
//! - **app** — Menu catalog and presentation state

pub mod app;
pub mod content;
pub mod currency;
pub mod theme;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::content::document::ContentDocument;
    pub use crate::content::item::{ContentItem, ContentKind};
    pub use crate::content::resolver::{Origin, GENERAL};
    pub use crate::content::store::ContentStore;
    pub use crate::currency::convert::{convert, Conversion};
    pub use crate::currency::rates::{CurrencyCode, RateTable};
    pub use crate::theme::color::Rgba;
    pub use crate::theme::preferences::{Preferences, ThemePreference};
}
