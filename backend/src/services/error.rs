//! Errors raised by aggregation services for invalid filter parameters.

/// Result type for aggregation calls.
pub type AggregationResult<T> = Result<T, AggregationError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AggregationError {
    /// `min > max` (or a NaN bound) in a distance filter.
    #[error("Invalid distance range: min {min} is greater than max {max}")]
    InvalidDistanceRange { min: f64, max: f64 },

    /// A bin count of zero was requested.
    #[error("Invalid bin count for {view}: must be at least 1")]
    InvalidBinCount { view: &'static str },
}
