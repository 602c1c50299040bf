use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::StoreError;
use crate::repo::RecordStore;

/// In-memory RecordStore for testing and desktop fallback.
///
/// Clones share the same map, so a test can keep one handle to inspect what a
/// manager wrote through another.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.entries.lock().map_err(|e| StoreError::Unavailable {
            message: e.to_string(),
        })
    }
}

impl RecordStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.write("users", "[]").unwrap();
        assert_eq!(other.read("users").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.read("users").unwrap(), None);
    }
}
