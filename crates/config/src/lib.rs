//! ALX Travel App Configuration
//!
//! Configuration management and startup utilities for the ALX Travel App.

pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use loader::{load_config, ConfigLoadError};
pub use settings::{ConfigValidationError, Settings};
pub use startup_logger::{log_service_info, log_service_shutdown, log_startup_complete};
