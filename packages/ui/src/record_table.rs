//! The user record table: filter, page, add, inline edit and delete.
//!
//! [`RecordTable`] owns the [`AppManager`] for the lifetime of the view. Rows are
//! always derived the same way: filter the canonical list, then take the current
//! page. Storage failures never reach the user as a crash; they are logged to the
//! activity log and the table keeps showing the unchanged list.

use dioxus::prelude::*;
use store::{filter, FilterSpec, Pager, RecordDraft, RecordError, RecordPatch, UserRecord};

use crate::activity_log::{ActivityLog, LogLevel, log_activity, use_activity_log};
use crate::activity_log_panel::ActivityLogToggle;
use crate::add_record_dialog::AddRecordDialog;
use crate::filter_bar::FilterBar;
use crate::repo::{make_manager, AppManager};
use crate::session::{use_gate, use_settings};
use crate::table_pagination::TablePagination;
use crate::views::ConfirmDialog;

const RECORD_TABLE_CSS: Asset = asset!("/assets/styling/record_table.css");

fn describe(record: &UserRecord) -> String {
    if record.full_name.is_empty() {
        format!("record {}", record.id)
    } else {
        format!("record {} ({})", record.id, record.full_name)
    }
}

fn report_failure(
    log: &mut Signal<ActivityLog>,
    record_id: Option<u64>,
    action: &str,
    err: RecordError,
) {
    let level = match err {
        RecordError::NotFound { .. } => LogLevel::Warning,
        RecordError::Storage(_) | RecordError::IdExhausted { .. } => LogLevel::Error,
    };
    log_activity(log, level, record_id, &format!("Could not {action}: {err}"));
}

#[component]
pub fn RecordTable() -> Element {
    let settings = use_settings();
    let gate = use_gate();
    let mut activity_log = use_activity_log();

    let records_config = settings.app.clone();
    let mut manager: Signal<AppManager> = use_signal(move || make_manager(&records_config));
    let default_page_size = settings.app.records.page_size();
    let mut pager = use_signal(move || Pager::new(default_page_size));
    let mut filter_open = use_signal(|| false);
    let mut filter_spec = use_signal(FilterSpec::default);
    let mut show_add = use_signal(|| false);
    let mut editing_id = use_signal(|| Option::<u64>::None);
    let mut edit_draft = use_signal(RecordDraft::default);
    let mut pending_delete = use_signal(|| Option::<UserRecord>::None);

    let username = gate.remembered_user().unwrap_or_else(|| "Guest".to_string());

    // Filter first, then page. The pager is clamped so a shrinking list never
    // leaves the view on a page past the end.
    let visible = filter(manager.read().records(), &filter_spec.read());
    let total = visible.len();
    let mut current = pager();
    current.clamp(total);
    let rows: Vec<UserRecord> = current.slice(&visible).to_vec();

    let handle_add = move |draft: RecordDraft| {
        let result = manager.write().add(draft);
        match result {
            Ok(record) => {
                log_activity(
                    &mut activity_log,
                    LogLevel::Success,
                    Some(record.id),
                    &format!("Added {}", describe(&record)),
                );
                show_add.set(false);
            }
            Err(e) => report_failure(&mut activity_log, None, "add record", e),
        }
    };

    let handle_edit = move |record: UserRecord| {
        edit_draft.set(RecordDraft::from(&record));
        editing_id.set(Some(record.id));
    };

    let handle_save = move |id: u64| {
        let patch = RecordPatch::from_draft(edit_draft());
        let result = manager.write().update(id, patch);
        match result {
            Ok(record) => {
                log_activity(
                    &mut activity_log,
                    LogLevel::Success,
                    Some(record.id),
                    &format!("Updated {}", describe(&record)),
                );
                editing_id.set(None);
            }
            Err(e @ RecordError::NotFound { .. }) => {
                editing_id.set(None);
                report_failure(&mut activity_log, Some(id), "save changes", e);
            }
            Err(e) => report_failure(&mut activity_log, Some(id), "save changes", e),
        }
    };

    let handle_confirm_delete = move |_: ()| {
        let Some(record) = pending_delete() else {
            return;
        };
        pending_delete.set(None);
        let result = manager.write().remove(record.id);
        match result {
            Ok(Some(removed)) => {
                if editing_id() == Some(removed.id) {
                    editing_id.set(None);
                }
                log_activity(
                    &mut activity_log,
                    LogLevel::Success,
                    Some(removed.id),
                    &format!("Deleted {}", describe(&removed)),
                );
            }
            Ok(None) => {
                log_activity(
                    &mut activity_log,
                    LogLevel::Info,
                    Some(record.id),
                    &format!("{} was already gone", describe(&record)),
                );
            }
            Err(e) => report_failure(&mut activity_log, Some(record.id), "delete record", e),
        }
    };

    let handle_filter = move |spec: FilterSpec| {
        if spec.value != filter_spec.read().value {
            pager.write().set_page(0);
        }
        filter_spec.set(spec);
    };

    rsx! {
        document::Stylesheet { href: RECORD_TABLE_CSS }

        div {
            class: "record-page",

            div {
                class: "record-toolbar",
                h2 { class: "welcome-banner", "Welcome, {username}!" }

                FilterBar {
                    open: filter_open(),
                    spec: filter_spec(),
                    on_toggle: move |_| filter_open.set(!filter_open()),
                    on_change: handle_filter,
                }

                div {
                    class: "record-toolbar-actions",
                    ActivityLogToggle {}
                    button {
                        class: "primary",
                        onclick: move |_| show_add.set(true),
                        "Add User"
                    }
                }
            }

            table {
                class: "record-table",
                thead {
                    tr {
                        th { "ID" }
                        th { "Full Name" }
                        th { "Address" }
                        th { "Phone Number" }
                        th { "Actions" }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td { class: "record-empty", colspan: "5", "No users to show." }
                        }
                    }
                    for record in rows {
                        RecordRow {
                            key: "{record.id}",
                            editing: editing_id() == Some(record.id),
                            draft: edit_draft(),
                            record: record.clone(),
                            on_edit: handle_edit,
                            on_change: move |draft: RecordDraft| edit_draft.set(draft),
                            on_save: handle_save,
                            on_delete: move |record: UserRecord| pending_delete.set(Some(record)),
                        }
                    }
                }
            }

            TablePagination {
                total: total,
                pager: current,
                on_change: move |next: Pager| pager.set(next),
            }

            if show_add() {
                AddRecordDialog {
                    on_add: handle_add,
                    on_cancel: move |_| show_add.set(false),
                }
            }

            if let Some(record) = pending_delete() {
                ConfirmDialog {
                    message: format!("Are you sure you want to delete {}?", describe(&record)),
                    on_confirm: handle_confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

/// One table row, either read-only or with inline text inputs.
#[component]
fn RecordRow(
    record: UserRecord,
    editing: bool,
    draft: RecordDraft,
    on_edit: EventHandler<UserRecord>,
    on_change: EventHandler<RecordDraft>,
    on_save: EventHandler<u64>,
    on_delete: EventHandler<UserRecord>,
) -> Element {
    let id = record.id;

    if !editing {
        let edit_record = record.clone();
        let delete_record = record.clone();
        return rsx! {
            tr {
                td { "{record.id}" }
                td { "{record.full_name}" }
                td { "{record.address}" }
                td { "{record.phone_number}" }
                td {
                    class: "record-actions",
                    button {
                        class: "icon-button",
                        title: "Edit",
                        onclick: move |_| on_edit.call(edit_record.clone()),
                        "\u{270E}"
                    }
                    button {
                        class: "icon-button danger",
                        title: "Delete",
                        onclick: move |_| on_delete.call(delete_record.clone()),
                        "\u{1F5D1}"
                    }
                }
            }
        };
    }

    let name_draft = draft.clone();
    let address_draft = draft.clone();
    let phone_draft = draft.clone();

    rsx! {
        tr {
            class: "editing",
            td { "{record.id}" }
            td {
                input {
                    r#type: "text",
                    value: draft.full_name.clone(),
                    oninput: move |evt: FormEvent| on_change.call(RecordDraft {
                        full_name: evt.value(),
                        ..name_draft.clone()
                    }),
                }
            }
            td {
                input {
                    r#type: "text",
                    value: draft.address.clone(),
                    oninput: move |evt: FormEvent| on_change.call(RecordDraft {
                        address: evt.value(),
                        ..address_draft.clone()
                    }),
                }
            }
            td {
                input {
                    r#type: "text",
                    value: draft.phone_number.clone(),
                    oninput: move |evt: FormEvent| on_change.call(RecordDraft {
                        phone_number: evt.value(),
                        ..phone_draft.clone()
                    }),
                }
            }
            td {
                class: "record-actions",
                button {
                    class: "icon-button primary",
                    title: "Save",
                    onclick: move |_| on_save.call(id),
                    "\u{1F4BE}"
                }
            }
        }
    }
}
