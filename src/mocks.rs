//! Mock route tables for tests and embedding examples

use axum::{extract::Path, response::Json, routing::any, Router};
use serde_json::{json, Value};

use alx_travel_api::AppState;

/// Catch-all route table standing in for the listings application.
///
/// Echoes the sub-path it was dispatched with, so callers can assert that
/// the remainder survived routing untouched.
pub fn mock_listings_router() -> Router<AppState> {
	Router::new()
		.route("/", any(listings_index))
		.route("/{*rest}", any(listings_echo))
}

async fn listings_index() -> Json<Value> {
	Json(json!({ "app": "listings", "matched": "" }))
}

async fn listings_echo(Path(rest): Path<String>) -> Json<Value> {
	Json(json!({ "app": "listings", "matched": rest }))
}
