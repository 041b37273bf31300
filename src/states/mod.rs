//! State Management Layer
//!
//! Owns the loaded collections and the five filter selections, and drives
//! the dual-fetch load cycle. Follows a single-writer data flow:
//!
//! ```text
//! load_data() → concurrent fetches → apply outcomes → derived getters
//! ```

mod dashboard;

pub use dashboard::*;
