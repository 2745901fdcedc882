use dioxus::prelude::*;

use crate::domain::Status;
use crate::ui::theme;

#[component]
pub fn StatusBadge(status: Status) -> Element {
    rsx! {
        span { class: "{theme::status_badge(status)}", "{status.label()}" }
    }
}
