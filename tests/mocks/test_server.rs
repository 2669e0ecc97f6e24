//! Test server for integration tests
//!
//! Spawns the real application on an ephemeral port so tests can drive it
//! over HTTP.

use alx_travel_app::{mocks, AppBuilder, AppState};
use axum::Router;
use tokio::task::JoinHandle;

/// Test server instance
pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

impl TestServer {
	/// Spawn a test server with the mock listings route table mounted
	#[allow(dead_code)]
	pub async fn spawn() -> Result<Self, Box<dyn std::error::Error>> {
		Self::spawn_with_listings(mocks::mock_listings_router()).await
	}

	/// Spawn a test server with the given listings route table
	#[allow(dead_code)]
	pub async fn spawn_with_listings(
		listings: Router<AppState>,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let (app, _) = AppBuilder::new().with_listings_router(listings).start()?;
		Self::spawn_server_with_app(app).await
	}

	/// Spawn a test server without any listings table injected
	#[allow(dead_code)]
	pub async fn spawn_minimal() -> Result<Self, Box<dyn std::error::Error>> {
		let (app, _) = AppBuilder::new().start()?;
		Self::spawn_server_with_app(app).await
	}

	/// Common server spawning logic
	async fn spawn_server_with_app(app: Router) -> Result<Self, Box<dyn std::error::Error>> {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
			.await
			.expect("bind test port");
		let addr = listener.local_addr().unwrap();
		let base_url = format!("http://{}:{}", addr.ip(), addr.port());

		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		// Give server time to start
		tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

		Ok(Self { base_url, handle })
	}

	#[allow(dead_code)]
	pub fn abort(self) {
		self.handle.abort();
	}
}
