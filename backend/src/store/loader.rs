//! CSV decoding and parsing for the flights dataset.

use log::{debug, warn};

use super::error::{ErrorContext, LoadError, LoadResult};
use crate::models::RawFlightRecord;

/// Columns the flights CSV must provide. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 11] = [
    "AIRLINE",
    "ORIGIN_AIRPORT",
    "DESTINATION_AIRPORT",
    "DESTINATION_AIRPORT_LAT",
    "DESTINATION_AIRPORT_LON",
    "SCHEDULED_TIME",
    "ELAPSED_TIME",
    "DEPARTURE_DELAY",
    "DESTINATION_DELAY",
    "DISTANCE",
    "FLIGHT_NUMBER",
];

/// Decode ISO-8859-1 bytes.
///
/// Every Latin-1 byte maps to the Unicode scalar of the same value, so this
/// never fails.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Parse decoded CSV text into raw records.
///
/// Fails on a missing required column, an unparsable value or a non-finite
/// number. Nothing is coerced.
pub fn parse_flights_csv(text: &str) -> LoadResult<Vec<RawFlightRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| LoadError::malformed(e.to_string(), ErrorContext::new("read_header")))?
        .clone();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns {
            missing,
            context: ErrorContext::new("validate_header"),
        });
    }
    debug!("CSV header has {} columns", headers.len());

    let mut records = Vec::new();
    for (index, result) in reader.deserialize::<RawFlightRecord>().enumerate() {
        let row = index as u64 + 1;
        let record = result.map_err(|e| {
            let mut context = ErrorContext::new("parse_rows").with_row(row);
            if let Some(column) = failing_column(&e, &headers) {
                context = context.with_column(column);
            }
            LoadError::malformed(e.to_string(), context)
        })?;

        if let Some(column) = record.first_invalid_column() {
            warn!("Rejecting row {}: invalid value in {}", row, column);
            return Err(LoadError::malformed(
                format!("Value in column {} is missing or not finite", column),
                ErrorContext::new("validate_rows")
                    .with_row(row)
                    .with_column(column),
            ));
        }

        records.push(record);
    }

    if records.is_empty() {
        return Err(LoadError::EmptyDataset {
            context: ErrorContext::new("parse_rows"),
        });
    }

    Ok(records)
}

/// Name of the column a deserialization error points at, when known.
fn failing_column(err: &csv::Error, headers: &csv::StringRecord) -> Option<String> {
    match err.kind() {
        csv::ErrorKind::Deserialize { err, .. } => err
            .field()
            .and_then(|index| headers.get(index as usize))
            .map(str::to_string),
        _ => None,
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
