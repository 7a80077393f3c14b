use crate::theme::color::Rgba;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Preferred color scheme. `System` defers to the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemePreference {
    System,
    Light,
    Dark,
}

/// A concrete scheme after `System` has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ThemePreference {
    /// Resolve against the ambient platform scheme.
    pub fn resolve(&self, system: ColorScheme) -> ColorScheme {
        match self {
            ThemePreference::Light => ColorScheme::Light,
            ThemePreference::Dark => ColorScheme::Dark,
            ThemePreference::System => system,
        }
    }
}

/// The four color slots the guide themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSlot {
    Accent,
    NoteBackground,
    RecommendationBackground,
    TableBackground,
}

/// Errors arising while persisting preferences.
///
/// Only saving can fail; loading degrades to defaults instead.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("failed to write preferences: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Persisted appearance preferences.
///
/// Serialized field names mirror the storage keys the app has always used,
/// so existing preference files keep working. Missing keys fill from the
/// defaults; an unreadable or corrupt file degrades to full defaults and is
/// never fatal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(rename = "selectedTheme", default = "default_theme")]
    pub theme: ThemePreference,

    #[serde(rename = "AccentColor", default = "default_accent")]
    pub accent_color: String,

    #[serde(rename = "NotesBG", default = "default_notes_bg")]
    pub notes_bg: String,

    #[serde(rename = "RecommendationBG", default = "default_recommendation_bg")]
    pub recommendation_bg: String,

    #[serde(rename = "TableBG", default = "default_table_bg")]
    pub table_bg: String,
}

fn default_theme() -> ThemePreference {
    ThemePreference::System
}

fn default_accent() -> String {
    "#FF0000".to_string()
}

fn default_notes_bg() -> String {
    "#FF0000".to_string()
}

fn default_recommendation_bg() -> String {
    "#0000FF".to_string()
}

fn default_table_bg() -> String {
    "#800080".to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            accent_color: default_accent(),
            notes_bg: default_notes_bg(),
            recommendation_bg: default_recommendation_bg(),
            table_bg: default_table_bg(),
        }
    }
}

impl Preferences {
    /// Load from the platform config location, or defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load from an explicit path, or defaults.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(preferences) => preferences,
                Err(e) => {
                    log::warn!("corrupt preference file, using defaults: {}", e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save to the platform config location.
    pub fn save(&self) -> Result<(), PreferenceError> {
        self.save_to(&Self::config_path())
    }

    /// Save to an explicit path, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), PreferenceError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Platform config file path.
    pub fn config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("guidebook");
        path.push("preferences.json");
        path
    }

    /// The decoded color for one slot. Malformed hex strings decode to the
    /// opaque-black fallback rather than failing.
    pub fn color(&self, slot: ColorSlot) -> Rgba {
        let hex = match slot {
            ColorSlot::Accent => &self.accent_color,
            ColorSlot::NoteBackground => &self.notes_bg,
            ColorSlot::RecommendationBackground => &self.recommendation_bg,
            ColorSlot::TableBackground => &self.table_bg,
        };
        Rgba::from_hex(hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let preferences = Preferences::default();
        assert_eq!(preferences.theme, ThemePreference::System);
        assert_eq!(preferences.accent_color, "#FF0000");
        assert_eq!(preferences.notes_bg, "#FF0000");
        assert_eq!(preferences.recommendation_bg, "#0000FF");
        assert_eq!(preferences.table_bg, "#800080");
    }

    #[test]
    fn test_storage_keys_are_stable() {
        let json = serde_json::to_string(&Preferences::default()).unwrap();
        for key in [
            "selectedTheme",
            "AccentColor",
            "NotesBG",
            "RecommendationBG",
            "TableBG",
        ] {
            assert!(json.contains(key), "missing key {}", key);
        }
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let preferences: Preferences =
            serde_json::from_str(r#"{"selectedTheme": "Dark"}"#).unwrap();
        assert_eq!(preferences.theme, ThemePreference::Dark);
        assert_eq!(preferences.accent_color, "#FF0000");
    }

    #[test]
    fn test_theme_values_serialize_as_plain_names() {
        let json = serde_json::to_string(&ThemePreference::Light).unwrap();
        assert_eq!(json, "\"Light\"");
    }

    #[test]
    fn test_resolve_theme() {
        assert_eq!(
            ThemePreference::System.resolve(ColorScheme::Dark),
            ColorScheme::Dark
        );
        assert_eq!(
            ThemePreference::Light.resolve(ColorScheme::Dark),
            ColorScheme::Light
        );
        assert_eq!(
            ThemePreference::Dark.resolve(ColorScheme::Light),
            ColorScheme::Dark
        );
    }

    #[test]
    fn test_color_slots_decode() {
        let preferences = Preferences::default();
        assert_eq!(
            preferences.color(ColorSlot::Accent),
            Rgba::new(255, 0, 0, 255)
        );
        assert_eq!(
            preferences.color(ColorSlot::TableBackground),
            Rgba::new(128, 0, 128, 255)
        );
    }

    #[test]
    fn test_malformed_color_degrades_to_black() {
        let preferences = Preferences {
            accent_color: "#12".to_string(),
            ..Default::default()
        };
        assert_eq!(preferences.color(ColorSlot::Accent), Rgba::OPAQUE_BLACK);
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let loaded = Preferences::load_from(Path::new("/nonexistent/preferences.json"));
        assert_eq!(loaded, Preferences::default());
    }
}
