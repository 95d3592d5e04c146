//! Key/value settings persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never touch `localStorage` directly. They go through a
//! [`SettingsStore`] held by the application context, so the browser backend
//! can be swapped for an in-memory one under SSR and in tests.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Minimal string settings interface.
pub trait SettingsStore: Send + Sync {
    /// Read the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Persist `value` under `key`. Best-effort; failures are ignored.
    fn set(&self, key: &str, value: &str);
}

/// Browser `localStorage` backend. No-ops outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageSettings;

impl SettingsStore for LocalStorageSettings {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            let _ = storage.set_item(key, value);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// Process-local backend used for server rendering and tests.
#[derive(Clone, Debug, Default)]
pub struct MemorySettings {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        let values = self.values.lock().ok()?;
        values.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_owned(), value.to_owned());
        }
    }
}
