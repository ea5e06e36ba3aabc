use serde::{Deserialize, Serialize};

use crate::models::DistanceRange;

// =========================================================
// Distance x airline delay heatmap
// =========================================================

/// Mean total delay of one airline within one distance bucket.
///
/// `mean_delay` is `None` for cells without flights; those are gaps, not zeros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceDelayCell {
    pub distance_bucket: usize,
    pub bucket_start: f64,
    pub bucket_end: f64,
    pub airline: String,
    pub mean_delay: Option<f64>,
    pub flight_count: usize,
}

/// Dense heatmap grid: every bucket for every airline present after filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceHeatmapData {
    pub cells: Vec<DistanceDelayCell>,
    pub bucket_edges: Vec<f64>,
    pub airlines: Vec<String>,
    pub distance_range: DistanceRange,
    pub total_count: usize,
}

/// Route function name constant for the distance heatmap
pub const GET_DISTANCE_HEATMAP: &str = "get_distance_heatmap";
