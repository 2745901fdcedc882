pub mod shipments;

pub use shipments::ShipmentsPage;
