use dioxus::prelude::*;

/// Numbered page buttons. Hidden entirely when everything fits on one page.
#[component]
pub fn Pagination(page: usize, total_pages: usize, on_page: EventHandler<usize>) -> Element {
    if total_pages <= 1 {
        return rsx! { Fragment {} };
    }

    rsx! {
        div { class: "pagination",
            for target in 1..=total_pages {
                button {
                    class: if target == page { "page-btn-active" } else { "page-btn" },
                    onclick: move |_| on_page.call(target),
                    "{target}"
                }
            }
        }
    }
}
