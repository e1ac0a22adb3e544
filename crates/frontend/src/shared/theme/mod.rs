//! Theme management module for the site.
//!
//! Light and dark themes. The dark theme is a `dark` class on the root element;
//! the preference is persisted in localStorage.

mod theme_toggle;

pub use theme_toggle::ThemeToggle;

use leptos::prelude::*;
use web_sys::window;

/// Available themes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the theme name as a string (used for data-theme and localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse theme from string. Unknown values fall back to light.
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

const THEME_STORAGE_KEY: &str = "nextwave-theme";

/// Load theme from localStorage.
fn load_theme_from_storage() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| Theme::parse(&s))
        .unwrap_or_default()
}

/// Save theme to localStorage.
fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// Apply theme: `dark` class on <html>, data-theme on <body>.
fn apply_theme(theme: Theme) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(root) = document.document_element() {
        let classes = root.class_list();
        let _ = match theme {
            Theme::Dark => classes.add_1("dark"),
            Theme::Light => classes.remove_1("dark"),
        };
    }

    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme_to_storage(theme);
        apply_theme(theme);
        log::debug!("theme: {}", theme.as_str());
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }

    pub fn is_dark(&self) -> bool {
        self.theme.get() == Theme::Dark
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = load_theme_from_storage();
    let theme = RwSignal::new(initial_theme);

    apply_theme(initial_theme);

    provide_context(ThemeContext { theme });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn test_theme_parse() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("forest"), Theme::Light);
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Theme::Dark);
    }

    #[test]
    fn test_theme_toggled() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
