use dioxus::prelude::*;

use ui::{ActivityLog, ActivityLogPanel, SessionProvider};
use views::{Login, Users};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/users")]
    Users {},
}

impl Route {
    fn from_page(page: auth::Page) -> Self {
        match page {
            auth::Page::Root => Route::Root {},
            auth::Page::Login => Route::Login {},
            auth::Page::Records => Route::Users {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ActivityLog::default()));

    rsx! {
        // Global app resources
        document::Title { "Users" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
            ActivityLogPanel {}
        }
    }
}

/// Send the visitor to the page the session gate picks for them, if any.
/// Returns true when a redirect was issued.
pub(crate) fn use_page_guard(page: auth::Page) -> bool {
    let session = ui::use_session();
    let nav = use_navigator();
    match auth::redirect(&session(), page) {
        Some(target) => {
            tracing::debug!("Redirecting {page:?} to {target:?}");
            nav.replace(Route::from_page(target));
            true
        }
        None => false,
    }
}

/// Redirect `/` to `/users` or `/login`
#[component]
fn Root() -> Element {
    use_page_guard(auth::Page::Root);
    rsx! {}
}
