//! # Application configuration — `user-records.toml`
//!
//! Defines the record section of the TOML configuration file (filename:
//! [`AppConfig::filename`] = `"user-records.toml"`). The native app reads it from
//! the platform config directory; the browser build always uses the defaults.
//!
//! ## Structure
//!
//! ```toml
//! [records]
//! storage_key = "users"     # key the JSON record list is stored under
//! default_page_size = 5     # 5 or 10
//! ```
//!
//! All structs derive `Default` so that a missing or empty config file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

use crate::query::PageSize;
use crate::repo::DEFAULT_STORAGE_KEY;

/// Top-level configuration stored in `user-records.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub records: RecordsConfig,
}

/// Record list configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordsConfig {
    /// Storage key holding the JSON array of records.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Rows per page when the table opens. Anything but 10 means 5.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_page_size() -> usize {
    5
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            default_page_size: default_page_size(),
        }
    }
}

impl RecordsConfig {
    pub fn page_size(&self) -> PageSize {
        PageSize::try_from(self.default_page_size).unwrap_or_default()
    }
}

impl AppConfig {
    /// Builder method to set the storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.records.storage_key = key.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "user-records.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
