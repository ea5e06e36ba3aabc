//! HTTP server module for the flight delay dashboard.
//!
//! An axum server exposing the aggregation views, the dashboard controls and
//! per-client filter sessions as a JSON API.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Query / JSON parsing                                   │
//! │  - Sessions (FilterParameters per client)                 │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │ spawn_blocking
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Aggregation views                                      │
//! │  - Filter-change dispatch                                 │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │ &[FlightRecord]
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Record Store (store/)                                    │
//! │  - Loaded once, shared read-only behind an Arc            │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod sessions;
pub mod state;

pub use error::{ApiError, AppError};
pub use router::create_router;
pub use sessions::{Session, SessionStore};
pub use state::AppState;
