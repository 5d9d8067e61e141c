use traillog_core::{KeyValueStore, StoreError};
use web_sys::Storage;

/// Browser `localStorage` adapter for the key-value store contract.
///
/// If the storage API is unavailable the adapter stays usable and every
/// operation surfaces a backend error, which the session degrades from
/// gracefully (activities simply stop persisting).
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("local storage unavailable, activities will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StoreError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StoreError::Backend("local storage unavailable".to_string()))
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?.get_item(key).map_err(js_err)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?.set_item(key, value).map_err(js_err)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.storage()?.remove_item(key).map_err(js_err)
    }
}

fn js_err(err: wasm_bindgen::JsValue) -> StoreError {
    StoreError::Backend(format!("{:?}", err))
}
