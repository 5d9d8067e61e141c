use crate::infrastructure::{KeyValueStore, StoreError};
use std::collections::HashMap;

/// In-memory key-value store.
///
/// Backs native runs and tests; the browser frontend uses its
/// `localStorage` adapter instead.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_returns_the_value() {
        let mut store = MemoryStore::new();
        store.set("k", "v").unwrap();

        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn get_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn remove_deletes_and_is_idempotent() {
        let mut store = MemoryStore::new();
        store.set("k", "v").unwrap();

        store.remove("k").unwrap();
        store.remove("k").unwrap();

        assert_eq!(store.get("k").unwrap(), None);
    }
}
