use super::*;
use crate::util::settings::MemorySettings;

fn settings_with(value: Option<&str>) -> (MemorySettings, ThemeSettings) {
    let store = MemorySettings::default();
    if let Some(value) = value {
        store.set(STORAGE_KEY, value);
    }
    let settings = ThemeSettings::new(Arc::new(store.clone()));
    (store, settings)
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn theme_parse_accepts_known_values_only() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("Light"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn theme_toggled_flips() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
}

// =============================================================
// ThemeSettings
// =============================================================

#[test]
fn load_defaults_to_dark_when_unset() {
    let (_, settings) = settings_with(None);
    assert_eq!(settings.load(), Theme::Dark);
}

#[test]
fn load_defaults_to_dark_on_garbage() {
    let (_, settings) = settings_with(Some("sepia"));
    assert_eq!(settings.load(), Theme::Dark);
}

#[test]
fn load_reads_persisted_light() {
    let (_, settings) = settings_with(Some("light"));
    assert_eq!(settings.load(), Theme::Light);
}

#[test]
fn toggle_persists_new_theme() {
    let (store, settings) = settings_with(None);
    let next = settings.toggle(settings.load());
    assert_eq!(next, Theme::Light);
    assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("light"));
}

#[test]
fn toggle_twice_restores_original_preference() {
    for original in ["dark", "light"] {
        let (store, settings) = settings_with(Some(original));
        let once = settings.toggle(settings.load());
        let twice = settings.toggle(once);
        assert_eq!(twice.as_str(), original);
        assert_eq!(store.get(STORAGE_KEY).as_deref(), Some(original));
    }
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Dark);
    apply(Theme::Light);
}
