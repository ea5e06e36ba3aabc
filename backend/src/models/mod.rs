pub mod airline;
pub mod filter;
pub mod flight;

pub use airline::AirlineDirectory;
pub use filter::{AirlineSelection, DistanceRange, FilterParameters};
pub use flight::{DelayMetric, FlightRecord, RawFlightRecord};
