use serde::Deserialize;

/// Public FoodData Central endpoint used when `USDA_BASE_URL` is not set.
pub const DEFAULT_USDA_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";

/// Upstream request timeout used when `USDA_TIMEOUT_SECS` is not set.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    /// `None` keeps the server bootable; every upstream call then fails.
    pub usda_api_key: Option<String>,
    pub usda_base_url: String,
    pub usda_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            usda_api_key: std::env::var("USDA_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            usda_base_url: std::env::var("USDA_BASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty())
                .map_or_else(|| Ok(DEFAULT_USDA_BASE_URL.to_string()), validate_base_url)?,
            usda_timeout_secs: std::env::var("USDA_TIMEOUT_SECS")
                .ok()
                .map_or(Ok(DEFAULT_TIMEOUT_SECS), |secs| {
                    secs.trim()
                        .parse::<u64>()
                        .ok()
                        .filter(|secs| *secs > 0)
                        .ok_or_else(|| {
                            anyhow::anyhow!("USDA_TIMEOUT_SECS must be a positive number of seconds")
                        })
                })?,
        };

        // Log successful configuration load (without the API key)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("USDA Base URL: {}", config.usda_base_url);
        tracing::debug!("USDA timeout: {}s", config.usda_timeout_secs);
        tracing::debug!("Server Port: {}", config.port);
        if config.usda_api_key.is_none() {
            tracing::warn!("USDA_API_KEY is not set; food lookups will fail until it is configured");
        }

        Ok(config)
    }
}

/// Rejects non-HTTP base URLs and strips a trailing slash so paths can be appended.
pub fn validate_base_url(url: String) -> anyhow::Result<String> {
    let url = url.trim();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!("USDA_BASE_URL must start with http:// or https://");
    }
    Ok(url.trim_end_matches('/').to_string())
}
