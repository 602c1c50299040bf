//! # Local storage record store — browser-side persistence
//!
//! [`LocalStorageStore`] is the [`RecordStore`] implementation used on the **web
//! platform**. It keeps each key as a string entry in `window.localStorage`.
//!
//! ## Connection management
//!
//! The struct holds nothing but an optional key prefix. The `Storage` handle is
//! looked up from `window` on every call; `web_sys::Storage` is not `Send` and
//! the lookup is a property read.
//!
//! ## Error handling
//!
//! Unlike reads, a failed `setItem` (quota exceeded, storage disabled by the
//! browser) is returned as [`StoreError::Write`] so the manager can keep its
//! previous state and the UI can warn the user.

use crate::error::StoreError;
use crate::repo::RecordStore;

/// Browser `localStorage`-backed RecordStore.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore {
    prefix: Option<String>,
}

impl LocalStorageStore {
    /// A store that reads and writes keys as given.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that prefixes every key with `"<namespace>:"`.
    pub fn with_namespace(namespace: Option<&str>) -> Self {
        Self {
            prefix: namespace.map(str::to_string),
        }
    }

    fn full_key(&self, key: &str) -> String {
        match &self.prefix {
            Some(ns) => format!("{ns}:{key}"),
            None => key.to_string(),
        }
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable {
            message: "no window".to_string(),
        })?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable {
                message: format!("{e:?}"),
            })?
            .ok_or_else(|| StoreError::Unavailable {
                message: "localStorage is disabled".to_string(),
            })
    }
}

impl RecordStore for LocalStorageStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(&self.full_key(key))
            .map_err(|e| StoreError::Unavailable {
                message: format!("{e:?}"),
            })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let full_key = self.full_key(key);
        Self::storage()?
            .set_item(&full_key, value)
            .map_err(|e| StoreError::Write {
                key: full_key,
                message: format!("{e:?}"),
            })
    }
}
