//! Shipment board page: registration form plus the filterable record table.

use dioxus::prelude::*;

use crate::{
    domain::{CargoStore, City, Status, StatusFilter},
    ui::{
        components::{
            cargo_table::{CargoTable, ShipmentRow},
            pagination::Pagination,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
    util::local_now,
};

#[component]
pub fn ShipmentsPage() -> Element {
    let mut store = use_context::<Signal<CargoStore>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let draft = store.with(|st| st.draft.clone());
    let filter = store.with(|st| st.filter);
    let form_error = store.with(|st| st.form_error);

    // Derived fresh on every render; the store never caches view state.
    let view = store.with(|st| st.current_page());
    let rows: Vec<ShipmentRow> = view.rows.iter().map(ShipmentRow::from).collect();

    let filter_options: Vec<StatusFilter> = std::iter::once(StatusFilter::All)
        .chain(Status::ALL.into_iter().map(StatusFilter::Only))
        .collect();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        // A rejected draft leaves its error on the store for inline display.
        let _ = store.with_mut(|st| st.submit_draft());
    };

    let on_status_change = {
        let toasts = toasts.clone();
        move |(id, status): (String, Status)| {
            let result = store.with_mut(|st| st.set_status(&id, status, local_now()));
            if let Err(err) = result {
                push_toast(toasts.clone(), ToastKind::Error, err.to_string());
            }
        }
    };

    let on_filter_change = move |evt: FormEvent| {
        if let Some(filter) = StatusFilter::parse(&evt.value()) {
            store.with_mut(|st| st.set_filter(filter));
        }
    };

    let on_page = move |page: usize| store.with_mut(|st| st.set_page(page));

    rsx! {
        section { class: theme::PANEL,
            div { class: "panel-header",
                h2 { class: "panel-title", "Register shipment" }
            }
            form {
                onsubmit: on_submit,
                div { class: "form-grid",
                    div {
                        label { class: theme::LABEL, "Cargo name" }
                        input {
                            class: theme::INPUT,
                            value: "{draft.name}",
                            placeholder: "e.g. Construction materials",
                            oninput: move |evt| store.with_mut(|st| st.draft.name = evt.value()),
                        }
                    }
                    div {
                        label { class: theme::LABEL, "Origin" }
                        select {
                            class: theme::SELECT,
                            value: draft.origin.map(|city| city.name()).unwrap_or(""),
                            onchange: move |evt: FormEvent| {
                                store.with_mut(|st| st.draft.origin = City::parse(&evt.value()));
                            },
                            option { value: "", selected: draft.origin.is_none(), "Select a city" }
                            for city in City::ALL {
                                option {
                                    value: city.name(),
                                    selected: draft.origin == Some(city),
                                    "{city.name()}"
                                }
                            }
                        }
                    }
                    div {
                        label { class: theme::LABEL, "Destination" }
                        select {
                            class: theme::SELECT,
                            value: draft.destination.map(|city| city.name()).unwrap_or(""),
                            onchange: move |evt: FormEvent| {
                                store.with_mut(|st| st.draft.destination = City::parse(&evt.value()));
                            },
                            option { value: "", selected: draft.destination.is_none(), "Select a city" }
                            for city in City::ALL {
                                option {
                                    value: city.name(),
                                    selected: draft.destination == Some(city),
                                    "{city.name()}"
                                }
                            }
                        }
                    }
                    div {
                        label { class: theme::LABEL, "Departure" }
                        input {
                            class: theme::INPUT,
                            r#type: "datetime-local",
                            value: "{draft.departure}",
                            oninput: move |evt| store.with_mut(|st| st.draft.departure = evt.value()),
                        }
                    }
                }
                if let Some(err) = form_error {
                    div { class: "form-error", "{err}" }
                }
                button { class: theme::BTN_PRIMARY, r#type: "submit", "Add shipment" }
            }
        }

        section { class: theme::PANEL,
            div { class: "panel-header",
                h2 { class: "panel-title", "Shipments" }
                div { class: "row-status",
                    span { class: "panel-count", "{view.filtered_count} total" }
                    select {
                        class: theme::SELECT_COMPACT,
                        value: "{filter.as_str()}",
                        onchange: on_filter_change,
                        for option_filter in filter_options {
                            option {
                                value: option_filter.as_str(),
                                selected: option_filter == filter,
                                "{option_filter.label()}"
                            }
                        }
                    }
                }
            }
            CargoTable { rows, on_status_change }
            Pagination { page: view.page, total_pages: view.total_pages, on_page }
        }
    }
}
