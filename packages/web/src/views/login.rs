//! Login page view with the username/password form.

use dioxus::prelude::*;
use ui::{alert, use_gate, use_session, LoginForm};

use crate::{use_page_guard, Route};

/// Login page component.
#[component]
pub fn Login() -> Element {
    let gate = use_gate();
    let mut session = use_session();
    let mut error = use_signal(|| Option::<String>::None);
    let nav = use_navigator();

    // If already logged in, go to the records
    if use_page_guard(auth::Page::Login) {
        return rsx! {};
    }

    let on_login = move |(username, password): (String, String)| {
        match gate.authenticate(&username, &password) {
            Ok(next) => {
                error.set(None);
                session.set(next);
                nav.replace(Route::Users {});
            }
            Err(e) => {
                let message = e.to_string();
                alert(&message);
                error.set(Some(message));
            }
        }
    };

    rsx! {
        div {
            class: "login-container",
            LoginForm {
                on_login: on_login,
                error: error(),
            }
        }
    }
}
