use std::sync::Arc;

use alx_travel_config::Settings;
use chrono::{DateTime, Utc};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub settings: Arc<Settings>,
	pub started_at: DateTime<Utc>,
}

impl AppState {
	pub fn new(settings: Arc<Settings>) -> Self {
		Self {
			settings,
			started_at: Utc::now(),
		}
	}

	/// Seconds since the state was created, as reported by the admin status
	pub fn uptime_seconds(&self) -> i64 {
		(Utc::now() - self.started_at).num_seconds()
	}
}
