//! NYC Open Data (Socrata) HTTP client.

use std::future::Future;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

use super::datasets::Dataset;
use super::error::OpenDataError;

/// Default base URL for NYC Open Data resources.
const DEFAULT_BASE_URL: &str = "https://data.cityofnewyork.us/resource";

/// Anything that can supply the raw records of a dataset.
pub trait DatasetSource: Send + Sync {
    /// Fetch the raw JSON records of one dataset.
    fn fetch_dataset(
        &self,
        dataset: &Dataset,
    ) -> impl Future<Output = Result<Vec<Value>, OpenDataError>> + Send;
}

/// Configuration for the Open Data client.
#[derive(Debug, Clone)]
pub struct OpenDataConfig {
    /// Optional Socrata app token (raises rate limits)
    pub app_token: Option<String>,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OpenDataConfig {
    /// Create a config with the default base URL and no app token.
    pub fn new() -> Self {
        Self {
            app_token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set the app token.
    pub fn with_app_token(mut self, token: impl Into<String>) -> Self {
        self.app_token = Some(token.into());
        self
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for OpenDataConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for NYC Open Data resource endpoints.
#[derive(Debug, Clone)]
pub struct OpenDataClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenDataClient {
    /// Create a new client.
    pub fn new(config: OpenDataConfig) -> Result<Self, OpenDataError> {
        let mut headers = HeaderMap::new();

        if let Some(token) = &config.app_token {
            let value = HeaderValue::from_str(token).map_err(|_| OpenDataError::InvalidToken)?;
            headers.insert(HeaderName::from_static("x-app-token"), value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of a dataset's JSON resource.
    pub fn dataset_url(&self, dataset: &Dataset) -> String {
        format!("{}/{}.json", self.base_url, dataset.id)
    }
}

impl DatasetSource for OpenDataClient {
    async fn fetch_dataset(&self, dataset: &Dataset) -> Result<Vec<Value>, OpenDataError> {
        let response = self
            .http
            .get(self.dataset_url(dataset))
            .query(&[("$limit", dataset.limit)])
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OpenDataError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| OpenDataError::Json {
            message: e.to_string(),
        })
    }
}
