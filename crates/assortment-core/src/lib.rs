pub mod app_config;
pub mod catalog;
pub mod config;
pub mod picker;

pub use app_config::{AppConfig, InstallationParameters};
pub use catalog::{CatalogRecord, Preview};
pub use config::{load_app_config, load_app_config_from_env, validate_parameters};
pub use picker::{AppManifest, FieldType, Pagination, ParameterDefinition, ProductPage};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    /// An installation parameter failed validation. `message` is user-facing.
    #[error("{message}")]
    InvalidParameter {
        parameter: &'static str,
        message: &'static str,
    },
}
