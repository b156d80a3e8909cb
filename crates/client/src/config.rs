use shared_types::{ApiConfig, AppConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "WORKSPHERE_API_URL";

/// Parse config file contents, falling back to defaults on error.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, path = CONFIG_PATH, "Failed to parse config, using defaults");
        AppConfig::default()
    })
}

/// Apply an optional base-URL override. Blank values are ignored.
pub fn with_api_url_override(mut config: AppConfig, url: Option<String>) -> AppConfig {
    if let Some(url) = url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
        config.api.base_url = url;
    }
    config
}

/// Read `.env`, `config.toml` and the environment once and store the result.
/// Safe to call multiple times; only the first call has effect.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();

        let config = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                tracing::info!(error = %e, path = CONFIG_PATH, "No config file, using defaults");
                AppConfig::default()
            }
        };
        let config = with_api_url_override(config, std::env::var(API_URL_ENV).ok());
        tracing::info!(base_url = %config.api.base_url, "Backend configured");
        config
    })
}

/// Backend settings from the loaded config.
pub fn api_config() -> &'static ApiConfig {
    &load_config().api
}
