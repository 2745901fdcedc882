use dioxus::prelude::*;

use crate::domain::{format_departure, CargoRecord, Status};
use crate::ui::components::status_badge::StatusBadge;
use crate::ui::theme;

#[derive(Clone, PartialEq)]
pub struct ShipmentRow {
    pub id: String,
    pub name: String,
    pub status: Status,
    pub origin: &'static str,
    pub destination: &'static str,
    pub departure_label: String,
}

impl From<&CargoRecord> for ShipmentRow {
    fn from(record: &CargoRecord) -> Self {
        ShipmentRow {
            id: record.id.clone(),
            name: record.name.clone(),
            status: record.status,
            origin: record.origin.name(),
            destination: record.destination.name(),
            departure_label: format_departure(record.departure),
        }
    }
}

#[component]
pub fn CargoTable(rows: Vec<ShipmentRow>, on_status_change: EventHandler<(String, Status)>) -> Element {
    let is_empty = rows.is_empty();
    rsx! {
        div { class: "table-wrap",
            table { class: "board-table",
                thead {
                    tr {
                        th { "ID" }
                        th { "Name" }
                        th { "Status" }
                        th { "Origin" }
                        th { "Destination" }
                        th { "Departure" }
                    }
                }
                tbody {
                    for row in rows {
                        ShipmentRowView { row, on_status_change: on_status_change.clone() }
                    }
                    if is_empty {
                        tr {
                            td { class: "empty-row", colspan: "6",
                                "No shipments match the current filter."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ShipmentRowViewProps {
    row: ShipmentRow,
    on_status_change: EventHandler<(String, Status)>,
}

#[component]
fn ShipmentRowView(props: ShipmentRowViewProps) -> Element {
    let row = props.row;
    let row_id = row.id.clone();
    rsx! {
        tr {
            td { "{row.id}" }
            td { "{row.name}" }
            td {
                div { class: "row-status",
                    StatusBadge { status: row.status }
                    select {
                        class: theme::SELECT_COMPACT,
                        value: "{row.status.as_str()}",
                        onchange: move |evt: FormEvent| {
                            if let Some(status) = Status::parse(&evt.value()) {
                                props.on_status_change.call((row_id.clone(), status));
                            }
                        },
                        for status in Status::ALL {
                            option {
                                value: status.as_str(),
                                selected: status == row.status,
                                "{status.label()}"
                            }
                        }
                    }
                }
            }
            td { "{row.origin}" }
            td { "{row.destination}" }
            td { "{row.departure_label}" }
        }
    }
}
