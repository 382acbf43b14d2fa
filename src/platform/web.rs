//! Browser host adapters (wasm32 only)

use super::KeyValueStore;

/// LocalStorage-backed store. Every access re-fetches the storage handle so a
/// browser denying storage (private mode) degrades to an absent value.
#[derive(Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<u64> {
        let storage = Self::storage()?;
        let raw = storage.get_item(key).ok()??;
        raw.parse().ok()
    }

    fn set(&mut self, key: &str, value: u64) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, &value.to_string()).is_err() {
                log::warn!("failed to persist {key}");
            }
        } else {
            log::warn!("LocalStorage unavailable, {key} not persisted");
        }
    }
}
