//! Venue Analytics Core Library
//!
//! This crate provides the data model, flattening transform, aggregation
//! queries, and load orchestration behind the venue purchase analytics
//! dashboard. Presentation is intentionally out of scope: callers read the
//! derived values and render them however they like.

pub mod analytics;
pub mod constants;
pub mod domain;
pub mod error;
pub mod services;
pub mod states;
pub mod utils;
