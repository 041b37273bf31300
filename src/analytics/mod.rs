//! Analytics Layer
//!
//! Pure, side-effect-free derivations over the loaded collections:
//!
//! ```text
//! Vec<DeviceUsage> ──flatten──▶ Vec<FlattenedPurchase>
//!                                      │
//! (Vec<Building>, rows, selections) ───┴──▶ option sets / totals / ranking
//! ```
//!
//! Nothing in this module fails: absent selections and unresolved building
//! IDs degrade to zero, empty, or sentinel results.

mod flatten;
mod queries;

pub use flatten::*;
pub use queries::*;
