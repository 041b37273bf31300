//! Application Constants
//!
//! Centralized endpoint paths and user-facing message fragments so the
//! orchestrator, HTTP client, and tests agree on exact strings.

/// Default base URL for the production API
pub const DEFAULT_BASE_URL: &str = "http://rnd-interview.mapsted.com/";

/// Endpoint path for the building collection
pub const BUILDING_ENDPOINT: &str = "GetBuildingData/";

/// Endpoint path for the device usage analytics collection
pub const ANALYTICS_ENDPOINT: &str = "GetAnalyticData/";

/// Default request timeout in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Prefix for buildings-fetch failure messages
pub const BUILDINGS_ERROR_PREFIX: &str = "Buildings: ";

/// Prefix for analytics-fetch failure messages
pub const ANALYTICS_ERROR_PREFIX: &str = "Analytics: ";

/// Sentinel shown when no building can be ranked
pub const UNKNOWN_BUILDING: &str = "\u{2014}";

/// Message for connectivity failures
pub const NO_CONNECTION_MESSAGE: &str =
    "No internet connection. Please check your network and try again.";

/// Message for non-2xx server responses
pub const UNEXPECTED_RESPONSE_MESSAGE: &str = "Unexpected server response.";

/// Config file name for the API client settings
pub const API_CONFIG_FILE: &str = "api_config.json";
