use serde::{Deserialize, Serialize};

// =========================================================
// Scalar summary tiles
// =========================================================

/// Global means and counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarSummary {
    pub mean_departure_delay: f64,
    pub mean_arrival_delay: f64,
    pub total_flight_count: usize,
    /// `-mean(recovered_time)`: minutes made up per flight, sign as displayed.
    pub mean_recovered_time: f64,
}

/// A formatted indicator tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryTile {
    pub title: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryData {
    pub summary: ScalarSummary,
    pub tiles: Vec<SummaryTile>,
}

/// Route function name constant for the scalar summary
pub const GET_SUMMARY: &str = "get_summary";
