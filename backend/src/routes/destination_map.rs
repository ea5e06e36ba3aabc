use serde::{Deserialize, Serialize};

use crate::models::DelayMetric;

// =========================================================
// Geographic destination map
// =========================================================

/// One flight plotted at its destination airport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationPoint {
    pub lat: f64,
    pub lon: f64,
    pub metric_value: f64,
    /// Fractional rank of `metric_value` within the whole column, in (0, 1].
    pub rank_percentile: f64,
    /// Marker area derived from the rank: `10 + 15 * rank_percentile`.
    pub marker_size: f64,
    pub destination_airport: String,
    pub origin_airport: String,
    pub airline_name: String,
}

/// Destination map dataset for one delay metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationMapData {
    pub metric: DelayMetric,
    pub metric_label: String,
    pub points: Vec<DestinationPoint>,
    /// Color scale bounds; both 0 for an empty dataset.
    pub value_min: f64,
    pub value_max: f64,
    pub total_count: usize,
}

/// Route function name constant for the destination map
pub const GET_DESTINATION_MAP: &str = "get_destination_map";
