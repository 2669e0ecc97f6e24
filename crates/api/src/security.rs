//! Security and caching response headers

use axum::{
	http::header::{HeaderName, HeaderValue, CACHE_CONTROL},
	Router,
};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

/// Apply a stack of sensible default security headers to the provided router.
///
/// Headers are only set when a handler did not already set them, so the
/// docs-specific caching policy survives this stack.
pub fn add_security_headers<S>(router: Router<S>) -> Router<S>
where
	S: Clone + Send + Sync + 'static,
{
	router.layer(
		ServiceBuilder::new()
			.layer(SetResponseHeaderLayer::if_not_present(
				HeaderName::from_static("strict-transport-security"),
				HeaderValue::from_static("max-age=31536000; includeSubDomains"),
			))
			.layer(SetResponseHeaderLayer::if_not_present(
				HeaderName::from_static("x-content-type-options"),
				HeaderValue::from_static("nosniff"),
			))
			.layer(SetResponseHeaderLayer::if_not_present(
				HeaderName::from_static("x-frame-options"),
				HeaderValue::from_static("DENY"),
			))
			.layer(SetResponseHeaderLayer::if_not_present(
				HeaderName::from_static("referrer-policy"),
				HeaderValue::from_static("strict-origin-when-cross-origin"),
			))
			.layer(SetResponseHeaderLayer::if_not_present(
				CACHE_CONTROL,
				HeaderValue::from_static("no-cache"),
			)),
	)
}

/// Caching policy for the documentation routes. The schema and both UIs are
/// regenerated per request and must never be cached.
pub fn no_store_cache_layer() -> SetResponseHeaderLayer<HeaderValue> {
	SetResponseHeaderLayer::overriding(CACHE_CONTROL, HeaderValue::from_static("no-store"))
}
