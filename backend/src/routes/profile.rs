use serde::{Deserialize, Serialize};

// =========================================================
// Dataset profile
// =========================================================

/// Descriptive statistics of one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub sum: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub column: String,
    pub stats: ColumnStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirlineCount {
    pub airline_code: String,
    pub airline_name: String,
    pub flights: usize,
}

/// Column statistics plus flight counts per airline, busiest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetProfile {
    pub columns: Vec<ColumnProfile>,
    pub airline_counts: Vec<AirlineCount>,
    pub total_count: usize,
}

/// Route function name constant for the dataset profile
pub const GET_DATASET_PROFILE: &str = "get_dataset_profile";
