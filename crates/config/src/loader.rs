//! Configuration loading utilities

use crate::{ConfigValidationError, Settings};
use config::{Config, ConfigError, File};
use thiserror::Error;

/// Errors raised while loading configuration from disk
#[derive(Debug, Error)]
pub enum ConfigLoadError {
	#[error("failed to read configuration: {0}")]
	Read(#[from] ConfigError),
	#[error("invalid configuration: {0}")]
	Invalid(#[from] ConfigValidationError),
}

/// Load configuration from the config file.
///
/// The file stem defaults to `config/config` (any extension the `config`
/// crate understands) and can be overridden with the `CONFIG_PATH`
/// environment variable. A missing file is not an error; deserialization
/// then fails on the empty source and callers fall back to defaults.
pub fn load_config() -> Result<Settings, ConfigLoadError> {
	let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config/config".to_string());

	let s = Config::builder()
		.add_source(File::with_name(&path).required(false))
		.build()?;

	let settings: Settings = s.try_deserialize()?;
	settings.validate()?;
	Ok(settings)
}
