//! # Record manager — the user list and its write-through store
//!
//! [`RecordManager`] owns the ordered list of [`UserRecord`]s shown by the UI. The
//! list is read once from a [`RecordStore`] when the manager is opened and every
//! mutation writes the whole list back under a single key, so the store and the
//! in-memory list never diverge.
//!
//! ## [`RecordStore`] trait
//!
//! A synchronous key/value interface with `read` and `write`. Implementations live
//! in sibling modules: [`crate::MemoryStore`] (tests, fallback),
//! [`crate::FileStore`] (native) and `LocalStorageStore` (browser, `web`
//! feature).
//!
//! ## Write path
//!
//! Every mutation follows the same pattern: build the next list from a copy of
//! the current one, serialise it to JSON, write it, and only then swap it in. A
//! failed write returns [`RecordError::Storage`] and leaves the manager at its
//! previous state, which is still what the store holds.
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`add`](RecordManager::add) | Appends a record with id = max id + 1 (or 1); `IdExhausted` past `u64::MAX`. |
//! | [`update`](RecordManager::update) | Merges a [`RecordPatch`] into the record with that id, or `NotFound`. |
//! | [`remove`](RecordManager::remove) | Drops the record with that id if present and persists the rest. |
//!
//! ## Read path
//!
//! [`load`] never fails: a missing key, a failing read or malformed JSON all
//! produce an empty list.

use tracing::{debug, warn};

use crate::error::{RecordError, StoreError};
use crate::models::{RecordDraft, RecordPatch, UserRecord};

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "users";

/// Key/value medium the record list is persisted to.
pub trait RecordStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: RecordStore + ?Sized> RecordStore for &S {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }
}

/// Read the persisted record list under `key`.
pub fn load<S: RecordStore>(store: &S, key: &str) -> Vec<UserRecord> {
    let raw = match store.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("Failed to read '{key}', starting empty: {e}");
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<UserRecord>>(&raw) {
        Ok(records) => records,
        Err(e) => {
            warn!("Ignoring malformed records under '{key}': {e}");
            Vec::new()
        }
    }
}

/// The id the next added record receives. Fails once the largest stored id is
/// `u64::MAX`.
pub fn next_id(records: &[UserRecord]) -> Result<u64, RecordError> {
    match records.iter().map(|r| r.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(RecordError::IdExhausted { max }),
    }
}

/// The user list backed by a RecordStore.
#[derive(Clone, Debug)]
pub struct RecordManager<S: RecordStore> {
    store: S,
    key: String,
    records: Vec<UserRecord>,
}

impl<S: RecordStore> RecordManager<S> {
    /// Open a manager on the default `"users"` key.
    pub fn open(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    /// Open a manager on a specific storage key, loading whatever it holds.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let records = load(&store, &key);
        debug!("Loaded {} records from '{key}'", records.len());
        Self {
            store,
            key,
            records,
        }
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn get(&self, id: u64) -> Option<&UserRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Re-read the list from the store, discarding the in-memory copy.
    pub fn reload(&mut self) {
        self.records = load(&self.store, &self.key);
    }

    /// Append a new record and persist the list.
    pub fn add(&mut self, draft: RecordDraft) -> Result<UserRecord, RecordError> {
        let record = draft.into_record(next_id(&self.records)?);
        let mut next = self.records.clone();
        next.push(record.clone());
        self.commit(next)?;
        Ok(record)
    }

    /// Merge `patch` into the record with `id` and persist the list.
    pub fn update(&mut self, id: u64, patch: RecordPatch) -> Result<UserRecord, RecordError> {
        let mut next = self.records.clone();
        let record = next
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(RecordError::NotFound { id })?;
        patch.apply(record);
        let updated = record.clone();
        self.commit(next)?;
        Ok(updated)
    }

    /// Drop the record with `id`, if any, and persist the remaining list.
    pub fn remove(&mut self, id: u64) -> Result<Option<UserRecord>, RecordError> {
        let mut next = self.records.clone();
        let removed = next
            .iter()
            .position(|r| r.id == id)
            .map(|index| next.remove(index));
        self.commit(next)?;
        Ok(removed)
    }

    fn commit(&mut self, next: Vec<UserRecord>) -> Result<(), RecordError> {
        let json = serde_json::to_string(&next).map_err(StoreError::from)?;
        self.store.write(&self.key, &json)?;
        self.records = next;
        Ok(())
    }
}
