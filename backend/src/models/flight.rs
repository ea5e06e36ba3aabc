//! Flight record types.
//!
//! [`RawFlightRecord`] mirrors one row of the source CSV. [`FlightRecord`] is the
//! same row after the derivation pass: delays floored at zero, total delay and
//! recovered time computed, airline display name resolved. The raw delays are
//! retained alongside the derived ones so the derivation can always be replayed
//! from the raw values.

use serde::{Deserialize, Serialize};

/// One row of the flights CSV, exactly as read from the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFlightRecord {
    #[serde(rename = "AIRLINE")]
    pub airline: String,
    #[serde(rename = "ORIGIN_AIRPORT")]
    pub origin_airport: String,
    #[serde(rename = "DESTINATION_AIRPORT")]
    pub destination_airport: String,
    #[serde(rename = "DESTINATION_AIRPORT_LAT")]
    pub destination_lat: f64,
    #[serde(rename = "DESTINATION_AIRPORT_LON")]
    pub destination_lon: f64,
    #[serde(rename = "SCHEDULED_TIME")]
    pub scheduled_time: f64,
    #[serde(rename = "ELAPSED_TIME")]
    pub elapsed_time: f64,
    #[serde(rename = "DEPARTURE_DELAY")]
    pub departure_delay: f64,
    #[serde(rename = "DESTINATION_DELAY")]
    pub arrival_delay: f64,
    #[serde(rename = "DISTANCE")]
    pub distance: f64,
    #[serde(rename = "FLIGHT_NUMBER")]
    pub flight_number: String,
}

impl RawFlightRecord {
    /// Numeric fields paired with their CSV column names.
    pub fn numeric_fields(&self) -> [(&'static str, f64); 7] {
        [
            ("DESTINATION_AIRPORT_LAT", self.destination_lat),
            ("DESTINATION_AIRPORT_LON", self.destination_lon),
            ("SCHEDULED_TIME", self.scheduled_time),
            ("ELAPSED_TIME", self.elapsed_time),
            ("DEPARTURE_DELAY", self.departure_delay),
            ("DESTINATION_DELAY", self.arrival_delay),
            ("DISTANCE", self.distance),
        ]
    }

    /// Returns the name of the first column holding an unusable value, if any.
    ///
    /// `f64` parsing accepts `NaN` and `inf`; both count as unusable.
    pub fn first_invalid_column(&self) -> Option<&'static str> {
        if let Some((column, _)) = self
            .numeric_fields()
            .into_iter()
            .find(|(_, value)| !value.is_finite())
        {
            return Some(column);
        }
        if self.flight_number.trim().is_empty() {
            return Some("FLIGHT_NUMBER");
        }
        None
    }
}

/// A flight record after derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub airline_code: String,
    pub airline_name: String,
    pub origin_airport: String,
    pub destination_airport: String,
    pub destination_lat: f64,
    pub destination_lon: f64,
    pub scheduled_time: f64,
    pub elapsed_time: f64,
    pub distance: f64,
    pub flight_number: String,
    /// Departure delay as read, possibly negative.
    pub raw_departure_delay: f64,
    /// Arrival delay as read, possibly negative.
    pub raw_arrival_delay: f64,
    /// `max(raw_departure_delay, 0)`
    pub departure_delay: f64,
    /// `max(raw_arrival_delay, 0)`
    pub arrival_delay: f64,
    /// `max(raw_departure_delay + raw_arrival_delay, 0)`; not the sum of the
    /// two clipped delays.
    pub total_delay: f64,
    /// `scheduled_time - elapsed_time`; positive when time was made up in the air.
    pub recovered_time: f64,
}

impl FlightRecord {
    /// Rebuilds the source row from the retained raw values.
    pub fn to_raw(&self) -> RawFlightRecord {
        RawFlightRecord {
            airline: self.airline_code.clone(),
            origin_airport: self.origin_airport.clone(),
            destination_airport: self.destination_airport.clone(),
            destination_lat: self.destination_lat,
            destination_lon: self.destination_lon,
            scheduled_time: self.scheduled_time,
            elapsed_time: self.elapsed_time,
            departure_delay: self.raw_departure_delay,
            arrival_delay: self.raw_arrival_delay,
            distance: self.distance,
            flight_number: self.flight_number.clone(),
        }
    }

    pub fn metric(&self, metric: DelayMetric) -> f64 {
        match metric {
            DelayMetric::Total => self.total_delay,
            DelayMetric::Departure => self.departure_delay,
            DelayMetric::Arrival => self.arrival_delay,
        }
    }
}

/// Delay column selectable for the geographic view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelayMetric {
    #[default]
    #[serde(alias = "TOTAL_DELAY")]
    Total,
    #[serde(alias = "DEPARTURE_DELAY")]
    Departure,
    #[serde(alias = "DESTINATION_DELAY", alias = "ARRIVAL_DELAY")]
    Arrival,
}

impl DelayMetric {
    pub const ALL: [DelayMetric; 3] = [DelayMetric::Total, DelayMetric::Departure, DelayMetric::Arrival];

    /// Wire value, as accepted in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            DelayMetric::Total => "total",
            DelayMetric::Departure => "departure",
            DelayMetric::Arrival => "arrival",
        }
    }

    /// Human-readable label used for axis titles and legends.
    pub fn label(&self) -> &'static str {
        match self {
            DelayMetric::Total => "Total delay (min)",
            DelayMetric::Departure => "Departure delay (min)",
            DelayMetric::Arrival => "Arrival delay (min)",
        }
    }
}

impl std::fmt::Display for DelayMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DelayMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "total" | "total_delay" => Ok(DelayMetric::Total),
            "departure" | "departure_delay" => Ok(DelayMetric::Departure),
            "arrival" | "arrival_delay" | "destination_delay" => Ok(DelayMetric::Arrival),
            other => Err(format!(
                "Unknown delay metric: {}. Valid options: total, departure, arrival",
                other
            )),
        }
    }
}
