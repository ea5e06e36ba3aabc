//! # Flight Delays Backend
//!
//! Analytics engine behind the US flight delays dashboard.
//!
//! The crate loads one month of US domestic flights from a CSV file or URL,
//! derives per-flight delay measures, and answers the dashboard's five
//! aggregation views for any combination of filter parameters.
//!
//! ## Architecture
//!
//! - [`models`]: Flight records, airline directory and filter parameters
//! - [`store`]: Loading, parsing and deriving the immutable record store
//! - [`services`]: Aggregation views and the filter-change dispatch table
//! - [`routes`]: Route-specific response types
//! - [`api`]: Re-exports of every DTO served over HTTP
//! - [`config`]: TOML and environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```no_run
//! use flight_delays::models::AirlineDirectory;
//! use flight_delays::services::compute_origin_summary;
//! use flight_delays::store::RecordStore;
//!
//! let csv = std::fs::read("flights.csv").unwrap();
//! let store = RecordStore::from_csv_bytes(&csv, AirlineDirectory::standard(), "flights.csv").unwrap();
//! let busiest = compute_origin_summary(store.records());
//! println!("{} origin airports", busiest.airports.len());
//! ```

pub mod api;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

#[cfg(feature = "http-server")]
pub mod http;
