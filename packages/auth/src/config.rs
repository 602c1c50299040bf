//! Allow-list and cookie settings for the session gate.
//!
//! Lives in the `[auth]` part of `user-records.toml`:
//!
//! ```toml
//! [[auth.credentials]]
//! username = "ibrahim"
//! password = "password1"
//!
//! [auth.cookie]
//! name = "user"
//! path = "/"
//! max_age_days = 7
//! ```
//!
//! An empty file yields the two built-in accounts and the default cookie.

use serde::{Deserialize, Serialize};

/// One allowed username/password pair. Compared in plain text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Where and for how long the username cookie is kept.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieSettings {
    #[serde(default = "default_cookie_name")]
    pub name: String,
    #[serde(default = "default_cookie_path")]
    pub path: String,
    #[serde(default = "default_max_age_days")]
    pub max_age_days: i64,
}

fn default_cookie_name() -> String {
    "user".to_string()
}

fn default_cookie_path() -> String {
    "/".to_string()
}

fn default_max_age_days() -> i64 {
    7
}

impl Default for CookieSettings {
    fn default() -> Self {
        Self {
            name: default_cookie_name(),
            path: default_cookie_path(),
            max_age_days: default_max_age_days(),
        }
    }
}

/// Session gate configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_credentials")]
    pub credentials: Vec<Credential>,
    #[serde(default)]
    pub cookie: CookieSettings,
}

fn default_credentials() -> Vec<Credential> {
    vec![
        Credential::new("ibrahim", "password1"),
        Credential::new("ahmed", "password2"),
    ]
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            credentials: default_credentials(),
            cookie: CookieSettings::default(),
        }
    }
}

impl AuthConfig {
    /// A config allowing exactly `credentials`.
    pub fn with_credentials(credentials: Vec<Credential>) -> Self {
        Self {
            credentials,
            cookie: CookieSettings::default(),
        }
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
