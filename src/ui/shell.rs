use dioxus::prelude::*;

use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    rsx! {
        div { class: "app",
            header { class: "app-header",
                div { class: "app-header-inner",
                    h1 { class: "app-title", "{APP_NAME}" }
                    span { class: "app-version", "{version_label()}" }
                }
            }
            main { class: "app-main", {children} }
        }
    }
}
