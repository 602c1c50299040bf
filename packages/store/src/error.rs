//! Error types for the storage medium, the record manager and list queries.

use thiserror::Error;

/// Failure of the underlying key/value medium.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage is unavailable: {message}")]
    Unavailable { message: String },

    #[error("failed to write key '{key}': {message}")]
    Write { key: String, message: String },

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode records: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure of a record manager operation.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("no record with id {id}")]
    NotFound { id: u64 },

    #[error("record ids are exhausted; the largest stored id is {max}")]
    IdExhausted { max: u64 },

    #[error("records were not saved: {0}")]
    Storage(#[from] StoreError),
}

impl RecordError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RecordError::NotFound { .. })
    }
}

/// Rejected filter or pager input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("unknown filter field '{field}'")]
    UnknownField { field: String },

    #[error("page size {size} is not one of 5, 10")]
    InvalidPageSize { size: usize },

    #[error("'{input}' is not a page size")]
    UnparsablePageSize { input: String },
}
