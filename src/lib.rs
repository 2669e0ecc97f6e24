//! ALX Travel App Library
//!
//! Application shell for the ALX Travel App web service: assembles the URL
//! routing table, serves the generated API documentation (Swagger UI and
//! Redoc renderings) and delegates the `/listings` URL space to the listings
//! application's route table.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tracing::{info, warn};

// API layer
pub use alx_travel_api::{create_router, AppState, OPENAPI_JSON_PATH};

// Config
pub use alx_travel_config::{load_config, log_service_info, log_startup_complete, Settings};

// Module aliases for embedders
pub mod api {
	pub use alx_travel_api::*;
}

pub mod config {
	pub use alx_travel_config::*;
}

pub mod mocks;

/// Builder pattern for configuring the application
pub struct AppBuilder {
	settings: Option<Settings>,
	listings_routes: Option<Router<AppState>>,
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl AppBuilder {
	/// Create a new application builder
	pub fn new() -> Self {
		Self {
			settings: None,
			listings_routes: None,
		}
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Mount the listings application's route table under `/listings`.
	///
	/// The table is owned by the listings application and injected here;
	/// when it is never provided, requests under the prefix fall through to
	/// the framework's not-found response.
	pub fn with_listings_router(mut self, routes: Router<AppState>) -> Self {
		self.listings_routes = Some(routes);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(
		&self,
		settings: &Settings,
	) -> Result<(), Box<dyn std::error::Error>> {
		use alx_travel_config::settings::LogFormat;

		// Create env filter using config level or environment variable
		let log_level = &settings.logging.level;
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

		match settings.logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
		}

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}

	/// Build the configured router with its application state
	pub fn start(self) -> Result<(Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.unwrap_or_default();
		settings
			.validate()
			.map_err(|e| format!("Invalid settings: {}", e))?;

		let listings_routes = match self.listings_routes {
			Some(routes) => routes,
			None => {
				warn!("No listings route table provided; /listings/ will serve not-found");
				Router::new()
			},
		};

		let state = AppState::new(Arc::new(settings));
		let router = create_router(listings_routes).with_state(state.clone());

		Ok((router, state))
	}

	/// Start the complete server with all defaults and setup
	/// This method handles everything needed to run the server, including:
	/// - Loading .env file
	/// - Loading configuration with defaults
	/// - Initializing tracing
	/// - Binding and serving the application
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		// Load .env file if it exists
		dotenvy::dotenv().ok();

		// Use provided settings or load from config with defaults
		let using_provided_settings = self.settings.is_some();
		let settings = if using_provided_settings {
			self.settings.take().unwrap()
		} else {
			load_config().unwrap_or_default()
		};

		// Initialize tracing with configuration-based settings
		self.init_tracing_from_settings(&settings)?;

		// Log comprehensive service startup information
		log_service_info();

		info!(
			"Using configuration: loaded from {}",
			if using_provided_settings {
				"provided settings"
			} else {
				"config file or defaults"
			}
		);

		// Parse bind address
		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		// Ensure we have proper configuration in the builder
		if self.settings.is_none() {
			self.settings = Some(settings.clone());
		}

		// Create the router using the builder pattern
		let (app, _) = self.start()?;

		// Start the server
		let listener = tokio::net::TcpListener::bind(addr).await?;

		// Log startup completion with the registered route table
		log_startup_complete(&bind_addr);
		info!("URL routes available:");
		info!("  GET  /admin/");
		info!("  GET  /admin/status");
		info!("  GET  /swagger");
		info!("  GET  /redoc");
		info!("  GET  {}", OPENAPI_JSON_PATH);
		info!("  *    /listings/...");

		// Apply global rate limiting based on settings at the make_service level
		let rate_cfg = &settings.environment.rate_limiting;
		if rate_cfg.enabled {
			use std::time::Duration;
			use tower::limit::RateLimitLayer;
			use tower::ServiceBuilder;
			let make_svc = ServiceBuilder::new()
				.layer(RateLimitLayer::new(
					rate_cfg.requests_per_minute as u64,
					Duration::from_secs(60),
				))
				.service(app.into_make_service());
			axum::serve(listener, make_svc).await?;
		} else {
			axum::serve(listener, app).await?;
		}

		Ok(())
	}
}
