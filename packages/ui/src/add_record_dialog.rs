use dioxus::prelude::*;
use store::RecordDraft;

use crate::views::ModalOverlay;

/// Dialog for adding a record. No field is required.
#[component]
pub fn AddRecordDialog(on_add: EventHandler<RecordDraft>, on_cancel: EventHandler<()>) -> Element {
    let mut full_name = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut phone_number = use_signal(String::new);

    let handle_add = move |_| {
        on_add.call(RecordDraft::new(full_name(), address(), phone_number()));
    };

    rsx! {
        ModalOverlay {
            title: "Add New User",
            on_close: move |_| on_cancel.call(()),

            div {
                class: "form-field",
                label { r#for: "new-record-name", "Full Name" }
                input {
                    id: "new-record-name",
                    r#type: "text",
                    autofocus: true,
                    value: full_name(),
                    oninput: move |evt: FormEvent| full_name.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { r#for: "new-record-address", "Address" }
                input {
                    id: "new-record-address",
                    r#type: "text",
                    value: address(),
                    oninput: move |evt: FormEvent| address.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { r#for: "new-record-phone", "Phone Number" }
                input {
                    id: "new-record-phone",
                    r#type: "text",
                    value: phone_number(),
                    oninput: move |evt: FormEvent| phone_number.set(evt.value()),
                }
            }

            div {
                class: "modal-actions",
                button {
                    class: "secondary",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "primary",
                    onclick: handle_add,
                    "Add"
                }
            }
        }
    }
}
