//! Domain - Pure Data Structures
//!
//! Wire-shaped record types for the two fetched collections. These carry no
//! behavior beyond lookup helpers and are replaced wholesale on each load.

pub mod building;
pub mod usage;

pub use building::*;
pub use usage::*;
