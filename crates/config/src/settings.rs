//! Configuration settings structures

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
	pub server: ServerSettings,
	pub environment: EnvironmentSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

/// Environment-specific settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EnvironmentSettings {
	pub profile: EnvironmentProfile,
	pub debug: bool,
	pub rate_limiting: RateLimitSettings,
}

/// Environment profiles
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentProfile {
	Development,
	Staging,
	Production,
}

impl EnvironmentProfile {
	pub fn as_str(&self) -> &'static str {
		match self {
			EnvironmentProfile::Development => "development",
			EnvironmentProfile::Staging => "staging",
			EnvironmentProfile::Production => "production",
		}
	}
}

/// Rate limiting configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RateLimitSettings {
	pub enabled: bool,
	pub requests_per_minute: u32,
	pub burst_size: u32,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

/// Errors produced by [`Settings::validate`]
#[derive(Debug, Error)]
pub enum ConfigValidationError {
	#[error("server host must not be empty")]
	EmptyHost,
	#[error("server port must be non-zero")]
	InvalidPort,
	#[error("logging level must not be empty")]
	EmptyLogLevel,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			server: ServerSettings {
				host: "0.0.0.0".to_string(),
				port: 8000,
			},
			environment: EnvironmentSettings {
				profile: EnvironmentProfile::Development,
				debug: true,
				rate_limiting: RateLimitSettings {
					enabled: false,
					requests_per_minute: 100,
					burst_size: 10,
				},
			},
			logging: LoggingSettings {
				level: "info".to_string(),
				format: LogFormat::Pretty,
				structured: false,
			},
		}
	}
}

impl Settings {
	/// Get server bind address
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	/// Check if running in production
	pub fn is_production(&self) -> bool {
		self.environment.profile == EnvironmentProfile::Production
	}

	/// Check if debug mode is enabled
	pub fn is_debug(&self) -> bool {
		self.environment.debug && !self.is_production()
	}

	/// Reject settings the server cannot start with
	pub fn validate(&self) -> Result<(), ConfigValidationError> {
		if self.server.host.trim().is_empty() {
			return Err(ConfigValidationError::EmptyHost);
		}
		if self.server.port == 0 {
			return Err(ConfigValidationError::InvalidPort);
		}
		if self.logging.level.trim().is_empty() {
			return Err(ConfigValidationError::EmptyLogLevel);
		}
		Ok(())
	}
}
