use dioxus::prelude::*;
use store::{PageSize, Pager};

/// Pager footer: rows-per-page selector, range label and previous/next buttons.
#[component]
pub fn TablePagination(total: usize, pager: Pager, on_change: EventHandler<Pager>) -> Element {
    rsx! {
        div {
            class: "table-pagination",
            label {
                class: "rows-per-page",
                "Rows per page: "
                select {
                    value: "{pager.page_size()}",
                    onchange: move |evt: FormEvent| match evt.value().parse::<PageSize>() {
                        Ok(size) => {
                            let mut next = pager;
                            next.set_page_size(size);
                            on_change.call(next);
                        }
                        Err(e) => tracing::warn!("{e}"),
                    },
                    for size in PageSize::ALL {
                        option {
                            key: "{size}",
                            value: "{size}",
                            selected: size == pager.page_size(),
                            "{size}"
                        }
                    }
                }
            }

            span { class: "range-label", "{pager.range_label(total)}" }

            button {
                class: "icon-button",
                title: "Previous page",
                disabled: !pager.has_previous(),
                onclick: move |_| {
                    let mut next = pager;
                    next.previous();
                    on_change.call(next);
                },
                "\u{2039}"
            }
            button {
                class: "icon-button",
                title: "Next page",
                disabled: !pager.has_next(total),
                onclick: move |_| {
                    let mut next = pager;
                    next.next(total);
                    on_change.call(next);
                },
                "\u{203A}"
            }
        }
    }
}
