use dioxus::prelude::*;

use crate::activity_log::{use_activity_log, ActivityView, LogLevel};

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/styling/activity_log.css");

fn level_class(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "activity-entry error",
        LogLevel::Warning => "activity-entry warning",
        LogLevel::Success => "activity-entry success",
        LogLevel::Info => "activity-entry info",
    }
}

/// Floating panel listing record changes and storage problems, one view at a
/// time.
#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();

    if !log().visible {
        return rsx! {};
    }

    let current = log().view;
    let shown = log().shown();
    let empty = format!("No {} entries.", current.label().to_lowercase());
    let tabs: Vec<(ActivityView, usize)> = ActivityView::ALL
        .iter()
        .map(|view| (*view, log().count(*view)))
        .collect();

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }

        aside {
            class: "activity-panel",
            header {
                class: "activity-header",
                nav {
                    class: "activity-tabs",
                    for (view, count) in tabs {
                        button {
                            key: "{view.label()}",
                            class: if view == current { "activity-tab selected" } else { "activity-tab" },
                            onclick: move |_| log.write().view = view,
                            "{view.label()} ({count})"
                        }
                    }
                }
                button { onclick: move |_| log.write().clear(), "Clear" }
                button { onclick: move |_| log.write().visible = false, "\u{2715}" }
            }
            ul {
                class: "activity-entries",
                if shown.is_empty() {
                    li { class: "activity-empty", "{empty}" }
                }
                for (i, entry) in shown.into_iter().enumerate() {
                    li {
                        key: "{i}",
                        class: level_class(entry.level),
                        time { "{entry.timestamp}" }
                        if let Some(id) = entry.record_id {
                            span { class: "activity-record", "#{id}" }
                        }
                        span { "{entry.message}" }
                    }
                }
            }
        }
    }
}

/// Table toolbar button. Shows the problem count when there is one.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let problems = log().count(ActivityView::Problems);
    let label = if problems > 0 {
        format!("{problems} problem(s)")
    } else {
        format!("Activity ({})", log().count(ActivityView::Changes))
    };

    rsx! {
        button {
            class: if problems > 0 { "activity-toggle has-problems" } else { "activity-toggle" },
            title: "Record activity",
            onclick: move |_| {
                let visible = log().visible;
                log.write().visible = !visible;
            },
            "{label}"
        }
    }
}
