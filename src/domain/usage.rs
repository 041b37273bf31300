//! Device Usage - Nested Purchase Session Data
//!
//! Wire shape of the GetAnalyticData endpoint: one record per device type,
//! each carrying purchase sessions keyed by building.

use serde::{Deserialize, Serialize};

/// One device type with its purchase sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceUsage {
    /// Manufacturer name (the only device field the queries use)
    pub manufacturer: String,
    /// Marketing name, display-only
    pub market_name: Option<String>,
    /// Internal codename, display-only
    pub codename: Option<String>,
    /// Model identifier, display-only
    pub model: Option<String>,
    /// Session container
    pub usage_statistics: UsageStatistics,
}

/// Container for session infos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageStatistics {
    pub session_infos: Vec<SessionInfo>,
}

/// One session at a building with its purchases
///
/// `building_id` is a foreign key into the building collection but is not
/// required to resolve; orphan IDs are valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub building_id: i64,
    pub purchases: Vec<Purchase>,
}

/// A single purchase record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub item_id: i64,
    pub item_category_id: i64,
    /// Non-negative, currency-agnostic; never rounded or formatted here
    pub cost: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_nested_wire_shape() {
        let json = r#"{
            "manufacturer": "Samsung",
            "market_name": "Galaxy S21",
            "codename": null,
            "model": "SM-G991B",
            "usage_statistics": {
                "session_infos": [
                    {
                        "building_id": 3,
                        "purchases": [
                            { "item_id": 100, "item_category_id": 10, "cost": 7.0 }
                        ]
                    }
                ]
            }
        }"#;
        let device: DeviceUsage = serde_json::from_str(json).expect("valid device JSON");
        assert_eq!(device.manufacturer, "Samsung");
        assert_eq!(device.market_name.as_deref(), Some("Galaxy S21"));
        assert_eq!(device.codename, None);
        assert_eq!(device.usage_statistics.session_infos.len(), 1);
        assert_eq!(device.usage_statistics.session_infos[0].purchases[0].cost, 7.0);
    }
}
