use super::*;
use proptest::prelude::*;

fn raw(airline: &str, departure: f64, arrival: f64) -> RawFlightRecord {
    RawFlightRecord {
        airline: airline.to_string(),
        origin_airport: "ATL".to_string(),
        destination_airport: "ORD".to_string(),
        destination_lat: 41.98,
        destination_lon: -87.90,
        scheduled_time: 120.0,
        elapsed_time: 110.0,
        departure_delay: departure,
        arrival_delay: arrival,
        distance: 606.0,
        flight_number: "42".to_string(),
    }
}

#[test]
fn test_clip_nonnegative() {
    assert_eq!(clip_nonnegative(-3.5), 0.0);
    assert_eq!(clip_nonnegative(0.0), 0.0);
    assert_eq!(clip_nonnegative(12.0), 12.0);
}

#[test]
fn test_total_delay_uses_raw_sum() {
    let record = derive_record(&raw("AA", -5.0, 3.0), &AirlineDirectory::standard());
    assert_eq!(record.departure_delay, 0.0);
    assert_eq!(record.arrival_delay, 3.0);
    assert_eq!(record.total_delay, 0.0);
    assert_ne!(record.total_delay, record.departure_delay + record.arrival_delay);
}

#[test]
fn test_total_delay_positive_raw_sum() {
    let record = derive_record(&raw("AA", -5.0, 20.0), &AirlineDirectory::standard());
    assert_eq!(record.total_delay, 15.0);
    assert_eq!(record.arrival_delay, 20.0);
}

#[test]
fn test_recovered_time_is_not_clipped() {
    let mut r = raw("AA", 0.0, 0.0);
    r.scheduled_time = 100.0;
    r.elapsed_time = 130.0;
    let record = derive_record(&r, &AirlineDirectory::standard());
    assert_eq!(record.recovered_time, -30.0);
}

#[test]
fn test_airline_name_resolution_and_fallback() {
    let dir = AirlineDirectory::standard();
    assert_eq!(derive_record(&raw("B6", 0.0, 0.0), &dir).airline_name, "JetBlue Airways");
    let unknown = derive_record(&raw("XQ", 0.0, 0.0), &dir);
    assert_eq!(unknown.airline_name, "XQ");
    assert_eq!(unknown.airline_code, "XQ");
}

#[test]
fn test_raw_values_are_retained() {
    let record = derive_record(&raw("AA", -7.0, -2.0), &AirlineDirectory::standard());
    assert_eq!(record.raw_departure_delay, -7.0);
    assert_eq!(record.raw_arrival_delay, -2.0);
    assert_eq!(record.to_raw(), raw("AA", -7.0, -2.0));
}

#[test]
fn test_rederive_is_idempotent() {
    let dir = AirlineDirectory::standard();
    let raws = vec![raw("AA", -5.0, 3.0), raw("DL", 12.0, -20.0), raw("ZZ", 4.0, 9.0)];
    let once = derive_records(&raws, &dir);
    let twice = rederive(&once, &dir);
    assert_eq!(once, twice);
}

proptest! {
    #[test]
    fn prop_derived_delays_are_nonnegative(
        departure in -500.0f64..1500.0,
        arrival in -500.0f64..1500.0,
    ) {
        let record = derive_record(&raw("AA", departure, arrival), &AirlineDirectory::standard());
        prop_assert!(record.departure_delay >= 0.0);
        prop_assert!(record.arrival_delay >= 0.0);
        prop_assert!(record.total_delay >= 0.0);
        prop_assert_eq!(record.total_delay, clip_nonnegative(departure + arrival));
    }

    #[test]
    fn prop_rederive_never_changes_records(
        departure in -500.0f64..1500.0,
        arrival in -500.0f64..1500.0,
        scheduled in 20.0f64..700.0,
        elapsed in 20.0f64..700.0,
    ) {
        let dir = AirlineDirectory::standard();
        let mut r = raw("UA", departure, arrival);
        r.scheduled_time = scheduled;
        r.elapsed_time = elapsed;
        let once = derive_records(&[r], &dir);
        prop_assert_eq!(rederive(&once, &dir), once);
    }
}
