//! Building - Venue Location Data

use serde::{Deserialize, Serialize};

/// A single building from the GetBuildingData endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    /// Unique ID (uniqueness is not enforced on ingest; lookups are first-match)
    pub building_id: i64,
    /// Display name
    pub building_name: String,
    /// City
    pub city: String,
    /// State or province
    pub state: String,
    /// Country
    pub country: String,
}

/// Find a building by ID. First match wins when the collection carries
/// duplicate IDs.
pub fn building_by_id(buildings: &[Building], building_id: i64) -> Option<&Building> {
    buildings.iter().find(|b| b.building_id == building_id)
}
