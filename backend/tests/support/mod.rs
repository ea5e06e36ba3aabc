#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use flight_delays::models::AirlineDirectory;
use flight_delays::store::RecordStore;

static ENV_LOCK: Mutex<()> = Mutex::new(());

pub const HEADER: &str = "AIRLINE,ORIGIN_AIRPORT,DESTINATION_AIRPORT,DESTINATION_AIRPORT_LAT,DESTINATION_AIRPORT_LON,SCHEDULED_TIME,ELAPSED_TIME,DEPARTURE_DELAY,DESTINATION_DELAY,DISTANCE,FLIGHT_NUMBER";

/// Two American flights within 600 miles and one long JetBlue flight.
pub const THREE_FLIGHTS: &[&str] = &[
    "AA,JFK,LAX,33.94,-118.41,390,380,10,5,100,1",
    "AA,JFK,ORD,41.98,-87.90,150,160,20,30,500,2",
    "B6,BOS,FLL,26.07,-80.15,200,190,-5,-10,1200,3",
];

/// Six flights over four origins, including a carrier code missing from the
/// directory.
pub const SIX_FLIGHTS: &[&str] = &[
    "AA,JFK,LAX,33.94,-118.41,390,380,10,5,100,1",
    "AA,JFK,ORD,41.98,-87.90,150,160,20,30,500,2",
    "B6,BOS,FLL,26.07,-80.15,200,190,-5,-10,1200,3",
    "DL,ATL,JFK,40.64,-73.78,130,127,0,-3,760,4",
    "DL,ATL,LAX,33.94,-118.41,290,285,45,40,1946,5",
    "ZZ,XYZ,ORD,41.98,-87.90,60,58,3,1,300,6",
];

pub fn csv_from_rows(rows: &[&str]) -> String {
    let mut csv = String::from(HEADER);
    for row in rows {
        csv.push('\n');
        csv.push_str(row);
    }
    csv.push('\n');
    csv
}

pub fn store_from_rows(rows: &[&str]) -> RecordStore {
    RecordStore::from_csv_bytes(
        csv_from_rows(rows).as_bytes(),
        AirlineDirectory::standard(),
        "fixture",
    )
    .expect("fixture CSV must load")
}

/// Runs `f` with environment variables temporarily modified.
///
/// Restores variables on unwind and serializes access to process-global env
/// vars across parallel tests.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}
