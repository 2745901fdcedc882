pub mod cargo_table;
pub mod pagination;
pub mod status_badge;
pub mod toast;
