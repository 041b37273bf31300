//! Service Layer
//!
//! Abstraction over the remote data source plus its production HTTP
//! implementation.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               DashboardState                 │
//! │        (owns a C: ApiClient, injected)       │
//! └──────────────────────┬───────────────────────┘
//!                        │ fetch_buildings / fetch_analytics
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │   HttpApiClient (reqwest)  |  test mocks     │
//! └──────────────────────────────────────────────┘
//! ```

mod api;
mod http_client;

pub use api::*;
pub use http_client::*;
