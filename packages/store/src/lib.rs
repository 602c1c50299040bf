pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod repo;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::AppConfig;
pub use error::{QueryError, RecordError, StoreError};
pub use models::{RecordDraft, RecordPatch, UserRecord};
pub use query::{filter, paginate, FilterField, FilterSpec, PageSize, Pager};
pub use repo::{RecordManager, RecordStore};
