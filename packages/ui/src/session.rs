//! Session context and hooks for the UI.

use auth::Session;
use dioxus::prelude::*;

use crate::repo::{load_settings, make_gate, AppGate, Settings};

/// Get the current session.
/// Returns a signal that updates when the user logs in.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Get the session gate holding the allow-list and cookie jar.
pub fn use_gate() -> AppGate {
    use_context::<AppGate>()
}

/// Get the settings loaded at startup.
pub fn use_settings() -> Settings {
    use_context::<Settings>()
}

/// Provider component that owns the session state, the gate and the settings.
/// Wrap your app with this component before the router.
///
/// The session always starts anonymous: a reload logs the user out even though
/// the username cookie survives.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(Session::anonymous);
    let settings = use_context_provider(load_settings);
    use_context_provider(move || make_gate(settings.auth.clone()));
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Show a blocking browser alert. Native builds only log it.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("{message}");
    }
}
