use serde::{Deserialize, Serialize};

// =========================================================
// Origin airport traffic vs. delay
// =========================================================

/// Traffic and delay summary for one origin airport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginSummary {
    pub airport: String,
    /// Mean total delay in minutes.
    pub mean_delay: f64,
    pub flight_count: usize,
}

/// Per-origin summaries ordered by flight count, busiest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginSummaryData {
    pub airports: Vec<OriginSummary>,
    pub total_flights: usize,
}

/// Route function name constant for the origin summary
pub const GET_ORIGIN_SUMMARY: &str = "get_origin_summary";
