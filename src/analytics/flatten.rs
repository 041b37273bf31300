//! Flattening Transform
//!
//! Projects the nested device/session/purchase tree into uniform rows so
//! every query can filter on one shape.

use crate::domain::DeviceUsage;

/// One purchase row with all fields needed for filtering
///
/// Derived from the nested collections, never supplied externally. Rows
/// have no identity beyond structural equality and are never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenedPurchase {
    pub manufacturer: String,
    pub building_id: i64,
    pub item_id: i64,
    pub item_category_id: i64,
    pub cost: f64,
}

/// Flatten the device usage tree into one row per (device, session, purchase).
///
/// Deterministic and order-preserving: output follows the nested traversal
/// order of the input, with no sorting. Sparse input simply yields fewer
/// rows.
pub fn flatten_purchases(devices: &[DeviceUsage]) -> Vec<FlattenedPurchase> {
    let mut rows = Vec::new();
    for device in devices {
        for session in &device.usage_statistics.session_infos {
            for purchase in &session.purchases {
                rows.push(FlattenedPurchase {
                    manufacturer: device.manufacturer.clone(),
                    building_id: session.building_id,
                    item_id: purchase.item_id,
                    item_category_id: purchase.item_category_id,
                    cost: purchase.cost,
                });
            }
        }
    }
    rows
}
