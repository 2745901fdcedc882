use dioxus::prelude::*;

use crate::{
    domain::{seed_records, CargoStore},
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::ShipmentsPage,
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Shipments {},
}

#[component]
pub fn App() -> Element {
    let store = use_signal(|| CargoStore::with_records(seed_records()));
    use_context_provider(|| store.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Shipments() -> Element {
    rsx! { Shell { ShipmentsPage {} } }
}
