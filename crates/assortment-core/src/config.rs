use crate::app_config::{AppConfig, InstallationParameters};
use crate::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "https://api.spreadshirt.net/api/v1";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but malformed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but malformed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Installation parameters are read as-is (empty when unset). They are not
/// validated here but when the API client is built.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let log_level = or_default("ASSORTMENT_LOG_LEVEL", "info");

    let installation = InstallationParameters {
        shop_id: or_default("ASSORTMENT_SHOP_ID", "").trim().to_string(),
        api_key: or_default("ASSORTMENT_API_KEY", "").trim().to_string(),
    };

    let api_base_url = or_default("ASSORTMENT_API_BASE_URL", DEFAULT_API_BASE_URL);

    let page_size = parse_u32("ASSORTMENT_PAGE_SIZE", "20")?;
    if page_size == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "ASSORTMENT_PAGE_SIZE".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let request_timeout_secs = parse_u64("ASSORTMENT_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("ASSORTMENT_USER_AGENT", "assortment/0.1 (sku-picker)");

    Ok(AppConfig {
        log_level,
        installation,
        api_base_url,
        page_size,
        request_timeout_secs,
        user_agent,
    })
}

/// Checks that both installation parameters are present.
///
/// The shop id is checked before the api key, so an install missing both
/// reports the shop id.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidParameter`] naming the first missing value.
pub fn validate_parameters(params: &InstallationParameters) -> Result<(), ConfigError> {
    if params.shop_id.is_empty() {
        return Err(ConfigError::InvalidParameter {
            parameter: "shopId",
            message: "Provide a Spreadgroup shop id.",
        });
    }

    if params.api_key.is_empty() {
        return Err(ConfigError::InvalidParameter {
            parameter: "apiKey",
            message: "Provide a Spreadgroup api key.",
        });
    }

    Ok(())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
