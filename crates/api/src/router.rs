use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
	compression::CompressionLayer,
	cors::CorsLayer,
	limit::RequestBodyLimitLayer,
	request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
	trace::TraceLayer,
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{admin_index, admin_status};
use crate::openapi::ApiDoc;
use crate::security::{add_security_headers, no_store_cache_layer};
use crate::state::AppState;

/// Path the machine-readable OpenAPI document is served under. Both
/// documentation UIs reference it.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// The built-in administrative interface
fn admin_router() -> Router<AppState> {
	Router::new()
		.route("/", get(admin_index))
		.route("/status", get(admin_status))
}

/// Swagger UI, Redoc and the raw OpenAPI document, all uncached
fn docs_router() -> Router<AppState> {
	Router::new()
		.merge(SwaggerUi::new("/swagger").url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
		.merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
		.layer(no_store_cache_layer())
}

/// Build the application routing table.
///
/// `listings_routes` is the route table of the listings application; it is
/// mounted under `/listings` with the path remainder preserved. The mount is
/// owned by that collaborator, so an empty router is a valid argument and
/// simply lets everything under the prefix fall through to not-found.
pub fn create_router(listings_routes: Router<AppState>) -> Router<AppState> {
	let cors = CorsLayer::permissive();
	let body_limit = RequestBodyLimitLayer::new(1024 * 1024);
	let trace = TraceLayer::new_for_http()
		.make_span_with(|req: &axum::http::Request<_>| {
			let req_id = req
				.headers()
				.get("x-request-id")
				.and_then(|v| v.to_str().ok())
				.unwrap_or("-");
			tracing::info_span!(
				"http_request",
				method = %req.method(),
				uri = %req.uri(),
				req_id
			)
		})
		.on_request(tower_http::trace::DefaultOnRequest::new().level(Level::INFO))
		.on_response(
			tower_http::trace::DefaultOnResponse::new()
				.level(Level::INFO)
				.latency_unit(tower_http::LatencyUnit::Millis),
		);
	let req_id = ServiceBuilder::new()
		.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
		.layer(PropagateRequestIdLayer::x_request_id());

	let router = Router::new()
		.nest("/admin", admin_router())
		.merge(docs_router())
		.nest("/listings", listings_routes);

	// Apply common layers
	let router = router
		.layer(cors)
		.layer(CompressionLayer::new())
		.layer(trace)
		.layer(req_id)
		.layer(body_limit);

	add_security_headers(router)
}
