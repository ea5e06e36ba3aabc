//! The record store: the immutable, fully derived flight table.
//!
//! The store is built once at startup and then shared read-only (typically
//! behind an `Arc`) by every aggregation call. There is no global instance.
//!
//! ```text
//! DataSource ──fetch──▶ bytes ──latin-1──▶ text ──csv──▶ RawFlightRecord*
//!                                                            │
//!                                                   derivation stage
//!                                                            ▼
//!                                                   RecordStore { FlightRecord* }
//! ```

pub mod checksum;
pub mod derivation;
pub mod error;
pub mod loader;
pub mod source;

use std::time::Duration;

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::models::{AirlineDirectory, FlightRecord, RawFlightRecord};

pub use checksum::dataset_checksum;
pub use derivation::{clip_nonnegative, derive_record, derive_records, rederive};
pub use error::{ErrorContext, LoadError, LoadResult};
pub use loader::{decode_latin1, parse_flights_csv, REQUIRED_COLUMNS};
pub use source::{DataSource, DEFAULT_DATA_URL, DEFAULT_FETCH_TIMEOUT};

/// Descriptive metadata about a loaded dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub source: String,
    pub record_count: usize,
    pub checksum: String,
    pub loaded_at: DateTime<Utc>,
}

/// Immutable table of derived flight records.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<FlightRecord>,
    airlines: AirlineDirectory,
    info: DatasetInfo,
}

impl RecordStore {
    /// Build a store from already parsed rows.
    pub fn from_raw(
        raws: &[RawFlightRecord],
        airlines: AirlineDirectory,
        source: impl Into<String>,
        checksum: impl Into<String>,
    ) -> Self {
        let records = derive_records(raws, &airlines);
        let info = DatasetInfo {
            source: source.into(),
            record_count: records.len(),
            checksum: checksum.into(),
            loaded_at: Utc::now(),
        };
        Self {
            records,
            airlines,
            info,
        }
    }

    /// Decode, parse and derive a CSV held in memory.
    pub fn from_csv_bytes(
        bytes: &[u8],
        airlines: AirlineDirectory,
        source: impl Into<String>,
    ) -> LoadResult<Self> {
        let source = source.into();
        let text = decode_latin1(bytes);
        let raws = parse_flights_csv(&text).map_err(|e| e.with_source(source.clone()))?;
        let checksum = dataset_checksum(&text);
        let store = Self::from_raw(&raws, airlines, source, checksum);
        info!(
            "Loaded {} flight records from {} (checksum {})",
            store.len(),
            store.info.source,
            store.info.checksum
        );
        Ok(store)
    }

    /// Fetch and load the dataset. Any failure aborts the load.
    pub async fn load(
        source: &DataSource,
        airlines: AirlineDirectory,
        timeout: Duration,
    ) -> LoadResult<Self> {
        info!("Loading flight records from {}", source);
        let bytes = source.fetch(timeout).await?;
        Self::from_csv_bytes(&bytes, airlines, source.to_string())
    }

    pub fn records(&self) -> &[FlightRecord] {
        &self.records
    }

    pub fn airlines(&self) -> &AirlineDirectory {
        &self.airlines
    }

    pub fn info(&self) -> &DatasetInfo {
        &self.info
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
