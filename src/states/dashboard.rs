//! Dashboard State
//!
//! Single source of truth for the analytics dashboard: the two loaded
//! collections, the load/offline/error status, and the five filter
//! selections. All derived values are recomputed on demand from the current
//! collections, so they can never go stale.

use crate::analytics::{self, FlattenedPurchase, flatten_purchases};
use crate::constants::{ANALYTICS_ERROR_PREFIX, BUILDINGS_ERROR_PREFIX};
use crate::domain::{Building, DeviceUsage};
use crate::error::FetchError;
use crate::services::ApiClient;

/// Dashboard state and load orchestrator
///
/// The data-source client is constructor-injected; production code passes
/// an [`crate::services::HttpApiClient`], tests pass a mock. This struct is
/// the sole writer of the loaded state: `load_data` takes `&mut self` and
/// applies both fetch outcomes after both have resolved, so concurrent
/// completions can never interleave a partial write.
pub struct DashboardState<C: ApiClient> {
    client: C,

    // Loaded data, replaced wholesale per successful fetch
    buildings: Vec<Building>,
    devices: Vec<DeviceUsage>,
    is_loading: bool,
    load_error: Option<String>,
    is_offline: bool,

    // Selections, freely mutable by the presentation layer
    pub selected_manufacturer: Option<String>,
    pub selected_category_id: Option<i64>,
    pub selected_country: Option<String>,
    pub selected_state: Option<String>,
    pub selected_item_id: Option<i64>,
}

impl<C: ApiClient> DashboardState<C> {
    /// Create an idle dashboard around the given data-source client
    pub fn new(client: C) -> Self {
        Self {
            client,
            buildings: Vec::new(),
            devices: Vec::new(),
            is_loading: false,
            load_error: None,
            is_offline: false,
            selected_manufacturer: None,
            selected_category_id: None,
            selected_country: None,
            selected_state: None,
            selected_item_id: None,
        }
    }

    // ==================== Load Cycle ====================

    /// Run one load cycle: fetch both collections concurrently, then apply
    /// the outcomes in buildings-then-analytics order.
    ///
    /// Each call starts fresh: the error and offline flags are reset before
    /// the fetches go out. A failure on one fetch never aborts the other.
    pub async fn load_data(&mut self) {
        self.is_loading = true;
        self.load_error = None;
        self.is_offline = false;

        let (building_result, analytics_result) = futures::join!(
            self.client.fetch_buildings(),
            self.client.fetch_analytics()
        );

        match building_result {
            Ok(list) => {
                tracing::info!("Loaded {} buildings", list.len());
                self.buildings = list;
            }
            Err(error) => self.record_failure(BUILDINGS_ERROR_PREFIX, error),
        }

        match analytics_result {
            Ok(list) => {
                tracing::info!("Loaded {} device usage records", list.len());
                self.devices = list;
                self.apply_default_selections();
            }
            Err(error) => self.record_failure(ANALYTICS_ERROR_PREFIX, error),
        }

        self.is_loading = false;
    }

    /// Fold one fetch failure into the combined error state.
    ///
    /// A connectivity failure raises the offline flag and replaces the whole
    /// combined message with its own description, even when the sibling
    /// fetch already contributed a labeled message. That overwrite matches
    /// the shipped behavior and is kept deliberately. Everything else is
    /// appended with its dimension prefix, newline-separated.
    fn record_failure(&mut self, prefix: &str, error: FetchError) {
        tracing::warn!("Fetch failed: {}{}", prefix, error);
        if error.is_connectivity() {
            self.is_offline = true;
            self.load_error = Some(error.to_string());
        } else {
            let mut message = self.load_error.take().unwrap_or_default();
            if !message.is_empty() {
                message.push('\n');
            }
            message.push_str(prefix);
            message.push_str(&error.to_string());
            self.load_error = Some(message);
        }
    }

    /// Seed each unset selection with the first element of its option set,
    /// computed from the state as it stands right now. Selections the caller
    /// already made are never touched.
    fn apply_default_selections(&mut self) {
        let rows = self.flattened_purchases();
        if self.selected_manufacturer.is_none() {
            self.selected_manufacturer =
                analytics::manufacturer_options(&rows).into_iter().next();
        }
        if self.selected_category_id.is_none() {
            self.selected_category_id = analytics::category_options(&rows).into_iter().next();
        }
        if self.selected_country.is_none() {
            self.selected_country = analytics::country_options(&self.buildings)
                .into_iter()
                .next();
        }
        if self.selected_state.is_none() {
            self.selected_state = analytics::state_options(&self.buildings)
                .into_iter()
                .next();
        }
        if self.selected_item_id.is_none() {
            self.selected_item_id = analytics::item_options(&rows).into_iter().next();
        }
    }

    // ==================== Loaded Data ====================

    /// Loaded buildings
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Loaded device usage records
    pub fn devices(&self) -> &[DeviceUsage] {
        &self.devices
    }

    /// Whether a load cycle is in flight
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether the last load failed for lack of connectivity
    pub fn is_offline(&self) -> bool {
        self.is_offline
    }

    /// Combined error message from the last load, if any
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Purchase rows derived from the current devices (recomputed on demand)
    pub fn flattened_purchases(&self) -> Vec<FlattenedPurchase> {
        flatten_purchases(&self.devices)
    }

    // ==================== Dropdown Options ====================

    pub fn manufacturer_options(&self) -> Vec<String> {
        analytics::manufacturer_options(&self.flattened_purchases())
    }

    pub fn category_options(&self) -> Vec<i64> {
        analytics::category_options(&self.flattened_purchases())
    }

    pub fn country_options(&self) -> Vec<String> {
        analytics::country_options(&self.buildings)
    }

    pub fn state_options(&self) -> Vec<String> {
        analytics::state_options(&self.buildings)
    }

    pub fn item_options(&self) -> Vec<i64> {
        analytics::item_options(&self.flattened_purchases())
    }

    // ==================== Computed Values ====================

    /// Total purchase cost for the selected manufacturer
    pub fn manufacturer_total(&self) -> f64 {
        analytics::manufacturer_total(
            &self.flattened_purchases(),
            self.selected_manufacturer.as_deref(),
        )
    }

    /// Total purchase cost for the selected item category
    pub fn category_total(&self) -> f64 {
        analytics::category_total(&self.flattened_purchases(), self.selected_category_id)
    }

    /// Total purchase cost in the selected country
    pub fn country_total(&self) -> f64 {
        analytics::country_total(
            &self.buildings,
            &self.flattened_purchases(),
            self.selected_country.as_deref(),
        )
    }

    /// Total purchase cost in the selected state
    pub fn state_total(&self) -> f64 {
        analytics::state_total(
            &self.buildings,
            &self.flattened_purchases(),
            self.selected_state.as_deref(),
        )
    }

    /// Number of times the selected item was purchased
    pub fn item_purchase_count(&self) -> usize {
        analytics::item_purchase_count(&self.flattened_purchases(), self.selected_item_id)
    }

    /// Name of the building with the most total purchase cost
    pub fn top_building_name(&self) -> String {
        analytics::top_building_name(&self.buildings, &self.flattened_purchases())
    }
}

impl<C: ApiClient> std::fmt::Debug for DashboardState<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardState")
            .field("buildings", &self.buildings.len())
            .field("devices", &self.devices.len())
            .field("is_loading", &self.is_loading)
            .field("is_offline", &self.is_offline)
            .field("load_error", &self.load_error)
            .finish()
    }
}
