use dioxus::prelude::*;
use ui::RecordTable;

use crate::use_page_guard;

/// The record table, for authenticated sessions only.
#[component]
pub fn Users() -> Element {
    if use_page_guard(auth::Page::Records) {
        return rsx! {};
    }

    rsx! {
        RecordTable {}
    }
}
