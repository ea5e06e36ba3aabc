//! Data Transfer Objects for the HTTP API.
//!
//! View payloads are the route DTOs re-exported from [`crate::api`]; this
//! module only adds query strings and session envelopes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::{
    AirlineSelection, DelayMetric, DistanceRange, FilterInput, FilterParameters, RegionUpdate,
};
use crate::store::DatasetInfo;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// The loaded dataset
    pub dataset: DatasetInfo,
    pub active_sessions: usize,
}

/// Query parameters for the destination map endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MetricQuery {
    /// Delay column to rank by (default: total)
    #[serde(default)]
    pub metric: Option<DelayMetric>,
}

/// Query parameters for the delay histogram endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AirlinesQuery {
    /// Comma-separated airline display names; absent or empty means all
    #[serde(default)]
    pub airlines: Option<String>,
}

impl AirlinesQuery {
    pub fn selection(&self) -> AirlineSelection {
        parse_airlines(self.airlines.as_deref())
    }
}

/// Query parameters for the distance heatmap and summary endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RangeQuery {
    /// Lower distance bound, inclusive (default: open)
    #[serde(default)]
    pub min: Option<f64>,
    /// Upper distance bound, inclusive (default: open)
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub airlines: Option<String>,
}

impl RangeQuery {
    pub fn range(&self) -> DistanceRange {
        DistanceRange::new(
            self.min.unwrap_or(f64::NEG_INFINITY),
            self.max.unwrap_or(f64::INFINITY),
        )
    }

    pub fn selection(&self) -> AirlineSelection {
        parse_airlines(self.airlines.as_deref())
    }

    /// True when no filter at all was supplied.
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none() && self.airlines.is_none()
    }
}

fn parse_airlines(list: Option<&str>) -> AirlineSelection {
    list.map(AirlineSelection::parse_list).unwrap_or_default()
}

/// A session together with freshly computed chart regions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub parameters: FilterParameters,
    pub regions: Vec<RegionUpdate>,
}

/// Session metadata without view payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfoResponse {
    pub session_id: Uuid,
    pub parameters: FilterParameters,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Regions affected by one applied filter change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeResponse {
    pub session_id: Uuid,
    pub input: FilterInput,
    pub parameters: FilterParameters,
    pub regions: Vec<RegionUpdate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_query_defaults_open() {
        let q = RangeQuery::default();
        assert!(q.is_empty());
        assert!(q.range().contains(0.0));
        assert!(q.range().contains(1e9));
        assert!(q.selection().is_all());
    }

    #[test]
    fn test_airlines_query_parses_list() {
        let q = AirlinesQuery {
            airlines: Some("Delta Air Lines Inc., JetBlue Airways".into()),
        };
        let sel = q.selection();
        assert_eq!(sel.names().len(), 2);
        assert!(sel.matches("JetBlue Airways"));
    }
}
