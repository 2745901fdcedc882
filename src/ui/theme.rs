//! Class-name helpers tying domain values to the embedded stylesheet.

use crate::domain::Status;

pub const INPUT: &str = "input";
pub const SELECT: &str = "select";
pub const SELECT_COMPACT: &str = "select select-compact";
pub const BTN_PRIMARY: &str = "btn-primary";
pub const LABEL: &str = "field-label";
pub const PANEL: &str = "panel";

pub fn status_badge(status: Status) -> &'static str {
    match status {
        Status::Pending => "badge badge-pending",
        Status::InTransit => "badge badge-in-transit",
        Status::Delivered => "badge badge-delivered",
    }
}
