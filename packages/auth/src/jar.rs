//! Client-side cookie storage.
//!
//! The gate only ever writes one cookie (the username) and reads it back for the
//! welcome banner. [`DocumentCookieJar`] talks to `document.cookie` in the
//! browser; [`MemoryCookieJar`] keeps cookies in a shared map for native builds
//! and tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use cookie::Cookie;

use crate::error::AuthError;

pub trait CookieJar {
    fn get(&self, name: &str) -> Option<Cookie<'static>>;
    fn set(&self, cookie: Cookie<'static>) -> Result<(), AuthError>;
}

/// In-memory cookie jar.
#[derive(Clone, Debug, Default)]
pub struct MemoryCookieJar {
    cookies: Arc<Mutex<HashMap<String, Cookie<'static>>>>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CookieJar for MemoryCookieJar {
    fn get(&self, name: &str) -> Option<Cookie<'static>> {
        self.cookies.lock().ok()?.get(name).cloned()
    }

    fn set(&self, cookie: Cookie<'static>) -> Result<(), AuthError> {
        let mut cookies = self.cookies.lock().map_err(|e| AuthError::Cookie {
            message: e.to_string(),
        })?;
        cookies.insert(cookie.name().to_string(), cookie);
        Ok(())
    }
}

/// Cookie jar backed by the browser's `document.cookie`.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
#[derive(Clone, Debug, Default)]
pub struct DocumentCookieJar;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl DocumentCookieJar {
    pub fn new() -> Self {
        Self
    }

    fn document() -> Result<web_sys::HtmlDocument, AuthError> {
        use wasm_bindgen::JsCast;

        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
            .ok_or_else(|| AuthError::Cookie {
                message: "no html document".to_string(),
            })
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl CookieJar for DocumentCookieJar {
    fn get(&self, name: &str) -> Option<Cookie<'static>> {
        // document.cookie only exposes name=value pairs
        let header = Self::document().ok()?.cookie().ok()?;
        Cookie::split_parse(header)
            .filter_map(Result::ok)
            .find(|c| c.name() == name)
            .map(Cookie::into_owned)
    }

    fn set(&self, cookie: Cookie<'static>) -> Result<(), AuthError> {
        Self::document()?
            .set_cookie(&cookie.to_string())
            .map_err(|e| AuthError::Cookie {
                message: format!("{e:?}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_jar_overwrites_by_name() {
        let jar = MemoryCookieJar::new();
        jar.set(Cookie::new("user", "ibrahim")).unwrap();
        jar.set(Cookie::new("user", "ahmed")).unwrap();

        assert_eq!(jar.get("user").map(|c| c.value().to_string()), Some("ahmed".to_string()));
        assert!(jar.get("theme").is_none());
    }
}
