use super::*;

#[test]
fn memory_settings_starts_empty() {
    let store = MemorySettings::default();
    assert_eq!(store.get("theme"), None);
}

#[test]
fn memory_settings_round_trips_and_overwrites() {
    let store = MemorySettings::default();
    store.set("theme", "light");
    assert_eq!(store.get("theme").as_deref(), Some("light"));
    store.set("theme", "dark");
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn memory_settings_clones_share_values() {
    let store = MemorySettings::default();
    let other = store.clone();
    other.set("theme", "light");
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_settings_is_noop_outside_browser() {
    let store = LocalStorageSettings;
    store.set("theme", "light");
    assert_eq!(store.get("theme"), None);
}
