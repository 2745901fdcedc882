//! State management and validation for the shipment board lives here.

pub mod entities;
pub mod store;
pub mod view;

#[allow(unused_imports)]
pub use entities::{format_departure, parse_departure, CargoRecord, City, DraftCargo, Status};
#[allow(unused_imports)]
pub use store::{seed_records, CargoStore, TransitionError, ValidationError};
#[allow(unused_imports)]
pub use view::{page_view, PageView, StatusFilter, PAGE_SIZE};
