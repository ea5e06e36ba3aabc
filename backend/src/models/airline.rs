//! IATA airline code to display name lookup.

use std::collections::BTreeMap;

/// Carriers present in the January 2015 US flights dataset.
const KNOWN_CARRIERS: [(&str, &str); 14] = [
    ("WN", "Southwest Airlines Co."),
    ("DL", "Delta Air Lines Inc."),
    ("OO", "SkyWest Airlines Inc."),
    ("AA", "American Airlines Inc."),
    ("UA", "United Airlines Inc."),
    ("EV", "Atlantic Southeast Airlines"),
    ("US", "US Airways Inc."),
    ("B6", "JetBlue Airways"),
    ("MQ", "American Eagle Airlines Inc."),
    ("AS", "Alaska Airlines Inc."),
    ("NK", "Spirit Airlines"),
    ("F9", "Frontier Airlines Inc."),
    ("HA", "Hawaiian Airlines Inc."),
    ("VX", "Virgin America"),
];

/// Immutable mapping from airline code to display name.
///
/// Codes missing from the directory resolve to themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirlineDirectory {
    names: BTreeMap<String, String>,
}

impl AirlineDirectory {
    /// Directory of the 14 carriers known to the dashboard.
    pub fn standard() -> Self {
        Self::from_pairs(KNOWN_CARRIERS)
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            names: pairs
                .into_iter()
                .map(|(code, name)| (code.into(), name.into()))
                .collect(),
        }
    }

    /// Add or replace entries, keeping the rest.
    pub fn with_overrides<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.names
            .extend(pairs.into_iter().map(|(code, name)| (code.into(), name.into())));
        self
    }

    /// Display name for `code`, falling back to the code itself.
    pub fn display_name(&self, code: &str) -> String {
        self.names
            .get(code)
            .cloned()
            .unwrap_or_else(|| code.to_string())
    }

    pub fn is_known(&self, code: &str) -> bool {
        self.names.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for AirlineDirectory {
    fn default() -> Self {
        Self::standard()
    }
}
