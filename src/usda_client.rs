use crate::config::Config;
use crate::errors::UpstreamError;
use serde_json::{json, Value};
use std::time::Duration;

/// Data types FoodData Central is asked to search across.
pub const SEARCH_DATA_TYPES: [&str; 3] = ["Survey (FNDDS)", "SR Legacy", "Branded"];

const MISSING_KEY_MESSAGE: &str = "USDA_API_KEY is not set. Check your .env file";

/// Client for the USDA FoodData Central API.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct UsdaClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl UsdaClient {
    /// Creates a new `UsdaClient` from the application configuration.
    ///
    /// A missing API key is not an error here; each call reports it instead.
    pub fn new(config: &Config) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.usda_timeout_secs))
            .build()
            .map_err(|e| UpstreamError::new(format!("Failed to create USDA client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.usda_base_url.trim_end_matches('/').to_string(),
            api_key: config.usda_api_key.clone(),
        })
    }

    fn api_key(&self) -> Result<&str, UpstreamError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| UpstreamError::new(MISSING_KEY_MESSAGE))
    }

    /// Searches foods by free-text query.
    ///
    /// # Arguments
    ///
    /// * `query` - Search term.
    /// * `page` - 1-based page number.
    /// * `page_size` - Results per page.
    ///
    /// # Returns
    ///
    /// * `Result<Value, UpstreamError>` - The raw FoodData Central search payload.
    pub async fn search_foods(
        &self,
        query: &str,
        page: i64,
        page_size: i64,
    ) -> Result<Value, UpstreamError> {
        let api_key = self.api_key()?;
        let url = format!("{}/foods/search", self.base_url);
        tracing::info!("Searching USDA foods for '{}' (page {}, size {})", query, page, page_size);
        tracing::debug!("USDA URL: {}?api_key=[REDACTED]", url);

        let body = json!({
            "query": query,
            "pageNumber": page,
            "pageSize": page_size,
            "dataType": SEARCH_DATA_TYPES,
        });

        let response = self
            .client
            .post(&url)
            .query(&[("api_key", api_key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error("USDA Search error", e))?;

        Self::read_json(response, "USDA Search error").await
    }

    /// Fetches a single food record by FDC ID.
    ///
    /// # Returns
    ///
    /// * `Result<Value, UpstreamError>` - The raw FoodData Central record. A
    ///   404 from upstream yields an error for which `is_not_found()` holds.
    pub async fn get_food_by_id(&self, fdc_id: i64) -> Result<Value, UpstreamError> {
        let api_key = self.api_key()?;
        let url = format!("{}/food/{}", self.base_url, fdc_id);
        tracing::info!("Fetching USDA food {}", fdc_id);
        tracing::debug!("USDA URL: {}?api_key=[REDACTED]", url);

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", api_key)])
            .send()
            .await
            .map_err(|e| transport_error("USDA food details error", e))?;

        Self::read_json(response, "USDA food details error").await
    }

    async fn read_json(response: reqwest::Response, context: &str) -> Result<Value, UpstreamError> {
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!("USDA returned error {}: {}", status, error_text);
            return Err(UpstreamError::with_status(
                format!("{}: {} {}", context, status.as_u16(), error_text),
                status.as_u16(),
            ));
        }

        response.json().await.map_err(|e| {
            UpstreamError::new(format!(
                "{}: failed to parse USDA response: {}",
                context,
                e.without_url()
            ))
        })
    }
}

/// The request URL carries `api_key`, so it is stripped before the error
/// reaches logs or response bodies.
fn transport_error(context: &str, e: reqwest::Error) -> UpstreamError {
    UpstreamError::new(format!("{}: {}", context, e.without_url()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> Config {
        Config {
            port: 8000,
            usda_api_key: api_key.map(str::to_string),
            usda_base_url: "http://127.0.0.1:9".to_string(),
            usda_timeout_secs: 10,
        }
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = UsdaClient::new(&config(Some("key")));
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_request() {
        let client = UsdaClient::new(&config(None)).unwrap();

        let err = client.get_food_by_id(1).await.unwrap_err();
        assert_eq!(err.message, MISSING_KEY_MESSAGE);
        assert_eq!(err.status, None);

        let err = client.search_foods("apple", 1, 20).await.unwrap_err();
        assert_eq!(err.message, MISSING_KEY_MESSAGE);
    }

    #[tokio::test]
    async fn test_connection_failure_hides_api_key() {
        // Nothing listens on the discard port
        let client = UsdaClient::new(&config(Some("secret-usda-key"))).unwrap();

        let err = client.get_food_by_id(1).await.unwrap_err();
        assert!(err.message.starts_with("USDA food details error: "));
        assert!(!err.message.contains("secret-usda-key"));
        assert_eq!(err.status, None);

        let err = client.search_foods("apple", 1, 20).await.unwrap_err();
        assert!(err.message.starts_with("USDA Search error: "));
        assert!(!err.message.contains("secret-usda-key"));
    }
}
