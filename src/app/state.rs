use crate::app::menu;
use crate::content::resolver::GENERAL;

/// Top-level screens of the guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Profile,
    Settings,
}

/// Identifies one highlight generation.
///
/// Returned by [`AppState::select_menu_item`]; a later
/// [`AppState::clear_highlight`] with a stale token is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightToken(u64);

/// Presentation state passed to rendering code.
///
/// Selection and highlight are plain data. Selecting a menu entry highlights
/// it and returns a token; clearing with that token removes the highlight,
/// but a newer selection invalidates older tokens — the delayed-clear a UI
/// layer schedules cancels itself naturally when the user moves on.
#[derive(Debug, Clone)]
pub struct AppState {
    pub tab: Tab,
    pub city: String,
    pub menu_item: String,
    highlighted: Option<(String, HighlightToken)>,
    generation: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            tab: Tab::default(),
            city: GENERAL.to_string(),
            menu_item: menu::DEFAULT_MENU_ITEM.to_string(),
            highlighted: None,
            generation: 0,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn select_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    /// Select a menu item and highlight it.
    pub fn select_menu_item(&mut self, menu_item: impl Into<String>) -> HighlightToken {
        let menu_item = menu_item.into();
        self.generation += 1;
        let token = HighlightToken(self.generation);
        self.menu_item = menu_item.clone();
        self.highlighted = Some((menu_item, token));
        token
    }

    /// Clear the highlight, but only if `token` is still the current one.
    pub fn clear_highlight(&mut self, token: HighlightToken) {
        if let Some((_, current)) = &self.highlighted {
            if *current == token {
                self.highlighted = None;
            }
        }
    }

    /// The currently highlighted menu-entry title, if any.
    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_ref().map(|(title, _)| title.as_str())
    }
}
