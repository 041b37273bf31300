//! Data Source Abstraction
//!
//! The orchestrator consumes exactly two async operations and never selects
//! endpoints or decodes payloads itself. Production and test clients both
//! implement this trait and are chosen by the caller through constructor
//! injection.

use crate::domain::{Building, DeviceUsage};
use crate::error::FetchResult;

/// Remote data source for the two dashboard collections
///
/// Implementations classify their failures into [`crate::error::FetchError`]
/// at this boundary; callers branch on the tag only.
pub trait ApiClient {
    /// Fetch the full building collection
    fn fetch_buildings(&self) -> impl Future<Output = FetchResult<Vec<Building>>> + Send;

    /// Fetch the full device usage (analytics) collection
    fn fetch_analytics(&self) -> impl Future<Output = FetchResult<Vec<DeviceUsage>>> + Send;
}
