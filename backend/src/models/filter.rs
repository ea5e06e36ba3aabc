//! User-selected filter parameters.
//!
//! These values are owned by the presentation side (one per session) and are
//! only ever read by the aggregation services.

use serde::{Deserialize, Serialize};

use super::flight::DelayMetric;

/// Selected airline display names. An empty selection means "all airlines".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AirlineSelection(Vec<String>);

impl AirlineSelection {
    pub fn all() -> Self {
        Self(Vec::new())
    }

    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Parses a comma-separated list of display names, ignoring blank entries.
    pub fn parse_list(list: &str) -> Self {
        Self(
            list.split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn is_all(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, airline_name: &str) -> bool {
        self.is_all() || self.0.iter().any(|name| name == airline_name)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }
}

/// Inclusive distance range in miles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceRange {
    pub min: f64,
    pub max: f64,
}

impl DistanceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Range that admits every distance.
    pub fn unbounded() -> Self {
        Self {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max || self.min.is_nan() || self.max.is_nan()
    }

    pub fn contains(&self, distance: f64) -> bool {
        self.min <= distance && distance <= self.max
    }

    /// Replace open (infinite) ends with `lo` / `hi`.
    pub fn bounded_by(self, lo: f64, hi: f64) -> Self {
        Self {
            min: if self.min.is_finite() { self.min } else { lo },
            max: if self.max.is_finite() { self.max } else { hi },
        }
    }
}

impl Default for DistanceRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Complete filter state of one dashboard session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterParameters {
    #[serde(default)]
    pub metric: DelayMetric,
    #[serde(default)]
    pub airlines: AirlineSelection,
    #[serde(default)]
    pub distance: DistanceRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_by_only_replaces_open_ends() {
        let open = DistanceRange::unbounded().bounded_by(31.0, 4983.0);
        assert_eq!(open, DistanceRange::new(31.0, 4983.0));

        let half = DistanceRange::new(200.0, f64::INFINITY).bounded_by(31.0, 4983.0);
        assert_eq!(half, DistanceRange::new(200.0, 4983.0));
    }

    #[test]
    fn test_empty_selection_matches_everything() {
        let sel = AirlineSelection::all();
        assert!(sel.is_all());
        assert!(sel.matches("JetBlue Airways"));
        assert!(sel.matches("ZZ"));
    }

    #[test]
    fn test_selection_matches_exact_names_only() {
        let sel = AirlineSelection::new(["American Airlines Inc."]);
        assert!(sel.matches("American Airlines Inc."));
        assert!(!sel.matches("American Eagle Airlines Inc."));
    }

    #[test]
    fn test_parse_list_trims_and_skips_blanks() {
        let sel = AirlineSelection::parse_list(" JetBlue Airways, ,Virgin America ");
        assert_eq!(sel.names(), &["JetBlue Airways".to_string(), "Virgin America".to_string()]);
        assert!(AirlineSelection::parse_list("").is_all());
    }

    #[test]
    fn test_distance_range_is_inclusive() {
        let range = DistanceRange::new(100.0, 500.0);
        assert!(range.contains(100.0));
        assert!(range.contains(500.0));
        assert!(!range.contains(500.5));
        assert!(!range.is_inverted());
        assert!(DistanceRange::new(600.0, 0.0).is_inverted());
    }

    #[test]
    fn test_filter_parameters_deserialize_with_defaults() {
        let params: FilterParameters = serde_json::from_str(r#"{"metric": "arrival"}"#).unwrap();
        assert_eq!(params.metric, DelayMetric::Arrival);
        assert!(params.airlines.is_all());
        assert!(params.distance.contains(1e9));
    }
}
