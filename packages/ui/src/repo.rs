//! Shared constructors for the record manager and the session gate.
//!
//! Picks the platform-appropriate backends:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageStore`],
//!   `document.cookie` via [`auth::DocumentCookieJar`]
//! - **Native**: filesystem via [`store::FileStore`], in-memory cookies via
//!   [`auth::MemoryCookieJar`]

use serde::{Deserialize, Serialize};

use auth::{AuthConfig, SessionGate};
use store::{AppConfig, RecordManager};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformJar = auth::DocumentCookieJar;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformJar = auth::MemoryCookieJar;

pub type AppManager = RecordManager<PlatformStore>;
pub type AppGate = SessionGate<PlatformJar>;

/// Everything `user-records.toml` can hold: `[records]` plus `[auth]`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(flatten)]
    pub app: AppConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

impl Settings {
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

/// Load settings for this platform.
///
/// Native builds read `<config_dir>/user-records/user-records.toml` when it
/// exists; a missing or unreadable file falls back to the defaults. The browser
/// build has no config file.
pub fn load_settings() -> Settings {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Settings::default()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let Some(path) = dirs::config_dir().map(|d| d.join("user-records").join(AppConfig::filename()))
        else {
            return Settings::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(content) => Settings::from_toml(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring invalid {}: {e}", path.display());
                Settings::default()
            }),
            Err(_) => Settings::default(),
        }
    }
}

/// Open the record manager on the configured storage key.
pub fn make_manager(config: &AppConfig) -> AppManager {
    let key = config.records.storage_key.clone();
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        RecordManager::with_key(store::LocalStorageStore::new(), key)
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("user-records");
        RecordManager::with_key(store::FileStore::new(base), key)
    }
}

/// Build the session gate with the configured allow-list.
pub fn make_gate(config: AuthConfig) -> AppGate {
    SessionGate::new(config, PlatformJar::new())
}
