pub mod admin;

pub use admin::{admin_index, admin_status};
