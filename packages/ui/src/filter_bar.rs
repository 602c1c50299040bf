use dioxus::prelude::*;
use store::{FilterField, FilterSpec};

/// Field selector and value input. Hidden until the filter toggle is pressed.
#[component]
pub fn FilterBar(
    open: bool,
    spec: FilterSpec,
    on_toggle: EventHandler<()>,
    on_change: EventHandler<FilterSpec>,
) -> Element {
    let field_spec = spec.clone();
    let value_spec = spec.clone();

    rsx! {
        div {
            class: "filter-bar",
            button {
                class: if open { "icon-button active" } else { "icon-button" },
                title: "Filter",
                onclick: move |_| on_toggle.call(()),
                "\u{2263}"
            }

            if open {
                select {
                    class: "filter-field",
                    value: spec.field.as_str(),
                    onchange: move |evt: FormEvent| match evt.value().parse::<FilterField>() {
                        Ok(field) => on_change.call(FilterSpec {
                            field,
                            ..field_spec.clone()
                        }),
                        Err(e) => tracing::warn!("{e}"),
                    },
                    for field in FilterField::ALL {
                        option {
                            key: "{field}",
                            value: field.as_str(),
                            selected: field == spec.field,
                            "{field.label()}"
                        }
                    }
                }
                input {
                    class: "filter-value",
                    r#type: "text",
                    placeholder: "Filter",
                    value: spec.value.clone(),
                    oninput: move |evt: FormEvent| on_change.call(FilterSpec {
                        value: evt.value(),
                        ..value_spec.clone()
                    }),
                }
            }
        }
    }
}
