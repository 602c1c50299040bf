//! # Auth crate — the session gate in front of the record table
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Allow-list of plain-text credentials and the username cookie settings |
//! | [`session`] | [`Session`], [`SessionGate::authenticate`] and the [`redirect`] guard |
//! | [`jar`] | [`CookieJar`] trait with browser and in-memory implementations |
//!
//! There is no logout: a session goes from anonymous to authenticated once and
//! ends when the page is reloaded.

pub mod config;
pub mod error;
pub mod jar;
pub mod session;

pub use config::{AuthConfig, CookieSettings, Credential};
pub use error::AuthError;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use jar::DocumentCookieJar;
pub use jar::{CookieJar, MemoryCookieJar};
pub use session::{redirect, Page, Session, SessionGate};
