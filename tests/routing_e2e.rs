//! URL routing E2E tests

mod mocks;

use crate::mocks::TestServer;
use reqwest::Client;

#[tokio::test]
async fn test_admin_is_routed_to_admin_never_listings() {
	let server = TestServer::spawn()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/admin/status", server.base_url))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["service"], "alx-travel-app");
	// The mock listings table tags everything it handles
	assert!(body.get("app").is_none(), "admin request leaked into listings");
	assert!(body["uptime_seconds"].as_i64().unwrap() >= 0);

	server.abort();
}

#[tokio::test]
async fn test_admin_index_page() {
	let server = TestServer::spawn()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/admin/", server.base_url))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let body = resp.text().await.unwrap();
	assert!(body.contains("ALX Travel App administration"));

	server.abort();
}

#[tokio::test]
async fn test_listings_subpaths_are_forwarded_verbatim() {
	let server = TestServer::spawn()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/listings/rooms/42/reviews", server.base_url))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["app"], "listings");
	assert_eq!(body["matched"], "rooms/42/reviews");

	server.abort();
}

#[tokio::test]
async fn test_listings_root_reaches_the_mounted_table() {
	let server = TestServer::spawn()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/listings/", server.base_url))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["app"], "listings");
	assert_eq!(body["matched"], "");

	server.abort();
}

#[tokio::test]
async fn test_unknown_paths_fall_through_to_not_found() {
	let server = TestServer::spawn()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/definitely-not-registered", server.base_url))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

	server.abort();
}

#[tokio::test]
async fn test_listings_without_a_table_serves_not_found() {
	let server = TestServer::spawn_minimal()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/listings/rooms/42", server.base_url))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

	server.abort();
}
