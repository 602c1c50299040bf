//! # Filesystem-backed record store
//!
//! [`FileStore`] is a [`RecordStore`] implementation that persists each key as a
//! JSON file on the local filesystem. It is the native counterpart of the
//! browser's local storage, used when the app runs outside a browser.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <key>.json     # the serialised record list
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/user-records/` |
//! | Linux | `~/.local/share/user-records/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\user-records\` |
//!
//! Writes go to a sibling temp file first and are renamed into place, so a
//! reader never observes a half-written list.

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::StoreError;
use crate::repo::RecordStore;

/// Filesystem-backed RecordStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &std::path::Path {
        &self.base
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl RecordStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        let path = self.key_path(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }
}
