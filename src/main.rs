//! ALX Travel App Server
//!
//! Main entry point for the application server

use alx_travel_app::AppBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Start the complete server with all defaults and setup handled automatically
	AppBuilder::new().start_server().await
}
