use serde::{Deserialize, Serialize};

// =========================================================
// Arrival delay histogram per airline
// =========================================================

/// Flight count of one airline within one arrival-delay bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelayHistogramBin {
    pub airline: String,
    pub bin_start: f64,
    pub bin_end: f64,
    pub count: usize,
}

/// Overlaid arrival-delay histograms. All airlines share the same bin edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelayHistogramData {
    pub bins: Vec<DelayHistogramBin>,
    /// `bin_count + 1` edges, empty when no records matched.
    pub bin_edges: Vec<f64>,
    /// Airlines present after filtering, sorted by name.
    pub airlines: Vec<String>,
    pub total_count: usize,
}

impl DelayHistogramData {
    pub fn empty() -> Self {
        Self {
            bins: vec![],
            bin_edges: vec![],
            airlines: vec![],
            total_count: 0,
        }
    }
}

/// Route function name constant for the delay histogram
pub const GET_DELAY_HISTOGRAM: &str = "get_delay_histogram";
