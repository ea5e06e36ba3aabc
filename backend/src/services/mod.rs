//! Service layer: the aggregation views and the filter-change dispatch.
//!
//! Every `compute_*` function is a pure function of the record slice and its
//! parameters. The HTTP layer runs them on the blocking pool against the
//! shared, read-only record store.

use serde::{Deserialize, Serialize};

pub mod controls;
pub mod delay_histogram;
pub mod destination_map;
pub mod dispatch;
pub mod distance_heatmap;
pub mod error;
pub mod origin_summary;
pub mod profile;
pub mod scalar_summary;
pub mod stats;

#[cfg(test)]
pub(crate) mod test_support;

pub use controls::compute_controls;
pub use delay_histogram::{compute_delay_histogram, DEFAULT_HISTOGRAM_BINS};
pub use destination_map::compute_destination_map;
pub use dispatch::{
    apply_change, default_parameters, full_dashboard, recompute_affected, stage_change,
};
pub use distance_heatmap::{compute_distance_heatmap, DEFAULT_DISTANCE_BUCKETS};
pub use error::{AggregationError, AggregationResult};
pub use origin_summary::compute_origin_summary;
pub use profile::compute_dataset_profile;
pub use scalar_summary::{compute_filtered_summary, compute_scalar_summary};

/// Tunables for the aggregation views (`[aggregation]` in the config file).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationSettings {
    pub histogram_bins: usize,
    pub heatmap_distance_bins: usize,
    /// How many airlines the selector pre-selects.
    pub default_airline_count: usize,
    pub distance_step: f64,
}

impl Default for AggregationSettings {
    fn default() -> Self {
        Self {
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            heatmap_distance_bins: DEFAULT_DISTANCE_BUCKETS,
            default_airline_count: 5,
            distance_step: 50.0,
        }
    }
}
