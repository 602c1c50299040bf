//! Session gate: credential check, username cookie, and the navigation guard.

use cookie::time::Duration;
use cookie::Cookie;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::jar::CookieJar;

/// Who is using the app. Lives only in UI state; a reload starts anonymous.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub authenticated: bool,
    pub username: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(username: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            username: Some(username.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

/// Pages the navigation guard knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Root,
    Login,
    Records,
}

/// Where `session` must be sent instead of `requested`, if anywhere.
pub fn redirect(session: &Session, requested: Page) -> Option<Page> {
    match (session.is_authenticated(), requested) {
        (true, Page::Login) | (true, Page::Root) => Some(Page::Records),
        (false, Page::Records) | (false, Page::Root) => Some(Page::Login),
        _ => None,
    }
}

/// Checks credentials against the configured allow-list.
#[derive(Debug, Clone)]
pub struct SessionGate<J: CookieJar> {
    config: AuthConfig,
    jar: J,
}

impl<J: CookieJar> SessionGate<J> {
    pub fn new(config: AuthConfig, jar: J) -> Self {
        Self { config, jar }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Validate `username`/`password`. On success the username is echoed into
    /// the cookie jar; a failing jar is logged and does not fail the login.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let allowed = self
            .config
            .credentials
            .iter()
            .any(|c| c.username == username && c.password == password);
        if !allowed {
            warn!("Rejected login for '{username}'");
            return Err(AuthError::InvalidCredentials);
        }

        if let Err(e) = self.jar.set(self.user_cookie(username)) {
            warn!("Failed to remember user '{username}': {e}");
        }
        info!("User '{username}' logged in");
        Ok(Session::authenticated(username))
    }

    /// The username last written to the cookie, if any.
    pub fn remembered_user(&self) -> Option<String> {
        self.jar
            .get(&self.config.cookie.name)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty())
    }

    fn user_cookie(&self, username: &str) -> Cookie<'static> {
        let settings = &self.config.cookie;
        Cookie::build((settings.name.clone(), username.to_string()))
            .path(settings.path.clone())
            .max_age(Duration::days(settings.max_age_days))
            .build()
    }
}
