//! ALX Travel App API
//!
//! Axum-based routing and generated API documentation for the ALX Travel App.

pub mod handlers;
pub mod openapi;
pub mod router;
pub mod security;
pub mod state;

pub use router::{create_router, OPENAPI_JSON_PATH};
pub use state::AppState;
