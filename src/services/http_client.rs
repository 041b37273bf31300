//! HTTP API Client
//!
//! Production implementation of [`ApiClient`] over reqwest. Validates the
//! response status, decodes JSON, and classifies every failure into the
//! closed [`FetchError`] taxonomy before it reaches the orchestrator.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::constants::{
    ANALYTICS_ENDPOINT, BUILDING_ENDPOINT, DEFAULT_BASE_URL, REQUEST_TIMEOUT_SECS,
};
use crate::domain::{Building, DeviceUsage};
use crate::error::{FetchError, FetchResult};
use crate::services::ApiClient;

/// Configuration for the HTTP API client
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API server, trailing slash included
    pub base_url: String,
    /// Path of the building collection endpoint
    pub building_endpoint: String,
    /// Path of the analytics collection endpoint
    pub analytics_endpoint: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            building_endpoint: BUILDING_ENDPOINT.to_string(),
            analytics_endpoint: ANALYTICS_ENDPOINT.to_string(),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Production API client backed by a shared reqwest client
pub struct HttpApiClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl HttpApiClient {
    /// Create a client for the given configuration
    pub fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, http })
    }

    /// Create a client with the production defaults
    pub fn with_defaults() -> anyhow::Result<Self> {
        Self::new(ApiConfig::default())
    }

    /// Get the current configuration
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url, endpoint)
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: &str) -> FetchResult<T> {
        let url = self.endpoint_url(endpoint);
        tracing::debug!("Fetching {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(classify_transport_error)?;

        if !response.status().is_success() {
            tracing::warn!("Request to {} returned status {}", url, response.status());
            return Err(FetchError::BadResponse);
        }

        response.json::<T>().await.map_err(classify_transport_error)
    }
}

impl ApiClient for HttpApiClient {
    async fn fetch_buildings(&self) -> FetchResult<Vec<Building>> {
        self.fetch(&self.config.building_endpoint).await
    }

    async fn fetch_analytics(&self) -> FetchResult<Vec<DeviceUsage>> {
        self.fetch(&self.config.analytics_endpoint).await
    }
}

impl std::fmt::Debug for HttpApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpApiClient")
            .field("config", &self.config)
            .finish()
    }
}

/// Map a reqwest error onto the closed fetch taxonomy
///
/// Only failures to reach the server classify as connectivity loss; decode
/// and other transport errors keep their description.
fn classify_transport_error(error: reqwest::Error) -> FetchError {
    if error.is_connect() {
        FetchError::NoConnection
    } else {
        FetchError::Other {
            message: error.to_string(),
        }
    }
}
