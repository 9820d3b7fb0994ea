pub mod app;
pub mod database;
pub mod observability;
pub mod server;

use thiserror::Error;

pub use app::{ApiConfig, AppConfig, AppMetadata};
pub use database::DatabaseConfig;
pub use observability::{LogFormat, ObservabilityConfig};
pub use server::{CorsConfig, ServerConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Sanity checks run after deserialization
pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Load the application configuration from files and environment variables
pub fn load() -> Result<AppConfig, ConfigError> {
    app::load_config()
}
