//! Theme initialization and toggle.
//!
//! Reads the user's preference from a [`SettingsStore`] and applies a
//! `data-theme` attribute to the `<html>` and `<body>` elements. Toggle writes
//! back through the store and updates both attributes.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::sync::Arc;

use super::settings::SettingsStore;

/// Settings key holding the persisted theme.
pub const STORAGE_KEY: &str = "theme";

/// Color scheme for the whole page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a persisted value. Unknown values are rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Glyph for the toggle button: the theme a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Dark => "☀",
            Self::Light => "☾",
        }
    }
}

/// Theme preference persisted behind a [`SettingsStore`].
#[derive(Clone)]
pub struct ThemeSettings {
    store: Arc<dyn SettingsStore>,
}

impl ThemeSettings {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// Stored theme, or [`Theme::Dark`] when nothing valid is stored.
    pub fn load(&self) -> Theme {
        self.store
            .get(STORAGE_KEY)
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or_default()
    }

    pub fn save(&self, theme: Theme) {
        self.store.set(STORAGE_KEY, theme.as_str());
    }

    /// Flip `current`, apply it to the document, and persist it.
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        apply(next);
        self.save(next);
        next
    }
}

/// Apply the `data-theme` attribute on the `<html>` and `<body>` elements.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
            if let Some(body) = doc.body() {
                let _ = body.set_attribute("data-theme", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
