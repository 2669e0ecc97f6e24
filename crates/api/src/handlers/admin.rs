//! Built-in administrative interface handlers

use axum::{
	extract::State,
	response::{Html, Json},
};
use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

use crate::state::AppState;

/// Service status reported by the admin interface
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminStatusResponse {
	pub service: String,
	pub version: String,
	pub profile: String,
	pub debug: bool,
	pub uptime_seconds: i64,
	pub timestamp: i64,
}

/// GET /admin/ - Administrative index page
#[utoipa::path(
    get,
    path = "/admin/",
    responses((status = 200, description = "Administrative index page", body = String, content_type = "text/html")),
    tag = "admin"
)]
pub async fn admin_index(State(state): State<AppState>) -> Html<String> {
	debug!("Rendering admin index");
	let profile = state.settings.environment.profile.as_str();
	Html(format!(
		r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>ALX Travel App administration</title>
</head>
<body>
  <h1>ALX Travel App administration</h1>
  <p>Running <code>alx-travel-app</code> v{version} ({profile}).</p>
  <ul>
    <li><a href="/swagger">Swagger UI</a></li>
    <li><a href="/redoc">Redoc</a></li>
    <li><a href="/api-docs/openapi.json">OpenAPI document</a></li>
    <li><a href="/admin/status">Service status</a></li>
  </ul>
</body>
</html>
"#,
		version = env!("CARGO_PKG_VERSION"),
		profile = profile,
	))
}

/// GET /admin/status - Service status for operators
#[utoipa::path(
    get,
    path = "/admin/status",
    responses((status = 200, description = "Service status", body = AdminStatusResponse)),
    tag = "admin"
)]
pub async fn admin_status(State(state): State<AppState>) -> Json<AdminStatusResponse> {
	Json(AdminStatusResponse {
		service: "alx-travel-app".to_string(),
		version: env!("CARGO_PKG_VERSION").to_string(),
		profile: state.settings.environment.profile.as_str().to_string(),
		debug: state.settings.is_debug(),
		uptime_seconds: state.uptime_seconds(),
		timestamp: chrono::Utc::now().timestamp(),
	})
}
