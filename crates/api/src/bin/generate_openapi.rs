//! # OpenAPI Specification Generator
//!
//! Generates the ALX Travel App OpenAPI specification JSON file from the API
//! definitions. It doesn't require starting the full server and can be used
//! as part of documentation or CI/CD workflows.
//!
//! ## Usage
//!
//! ```bash
//! # Generate to default location (docs/api/openapi.json)
//! cargo run --bin generate_openapi
//!
//! # Generate to custom location
//! cargo run --bin generate_openapi -- custom/path/openapi.json
//! ```

use std::env;
use std::fs;
use std::path::Path;

use alx_travel_api::openapi::ApiDoc;
use utoipa::OpenApi;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args: Vec<String> = env::args().collect();
	let output_path = args
		.get(1)
		.map(|s| s.as_str())
		.unwrap_or("docs/api/openapi.json");

	if let Some(parent) = Path::new(output_path).parent() {
		if !parent.exists() {
			fs::create_dir_all(parent)?;
		}
	}

	println!("🚀 Generating OpenAPI specification to {}", output_path);

	let openapi = ApiDoc::openapi();
	let json = serde_json::to_string_pretty(&openapi)?;
	fs::write(output_path, json)?;

	println!("✅ OpenAPI specification successfully generated!");

	Ok(())
}
