mod support;

use std::io::Write;
use std::time::Duration;

use flight_delays::models::AirlineDirectory;
use flight_delays::store::{dataset_checksum, DataSource, LoadError, RecordStore};

use support::{csv_from_rows, HEADER, THREE_FLIGHTS};

const TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn test_load_from_file() {
    let csv = csv_from_rows(THREE_FLIGHTS);
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(csv.as_bytes()).unwrap();

    let source = DataSource::File(file.path().to_path_buf());
    let store = RecordStore::load(&source, AirlineDirectory::standard(), TIMEOUT)
        .await
        .unwrap();

    assert_eq!(store.len(), 3);
    assert_eq!(store.info().record_count, 3);
    assert_eq!(store.info().checksum, dataset_checksum(&csv));
    assert!(store.info().source.starts_with("file:"));
    assert_eq!(store.records()[2].airline_name, "JetBlue Airways");
}

#[tokio::test]
async fn test_load_latin1_file() {
    let mut bytes = HEADER.as_bytes().to_vec();
    bytes.extend_from_slice(b"\nAA,S");
    bytes.push(0xE3);
    bytes.extend_from_slice(b"o,GRU,-23.43,-46.47,600,590,0,0,4800,9\n");

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&bytes).unwrap();

    let source = DataSource::File(file.path().to_path_buf());
    let store = RecordStore::load(&source, AirlineDirectory::standard(), TIMEOUT)
        .await
        .unwrap();
    assert_eq!(store.records()[0].origin_airport, "São");
}

#[tokio::test]
async fn test_header_only_file_is_empty_dataset() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{}", HEADER).unwrap();

    let source = DataSource::File(file.path().to_path_buf());
    let err = RecordStore::load(&source, AirlineDirectory::standard(), TIMEOUT)
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::EmptyDataset { .. }));
}

#[tokio::test]
async fn test_malformed_row_aborts_load() {
    let csv = csv_from_rows(&[
        THREE_FLIGHTS[0],
        "AA,JFK,ORD,41.98,-87.90,150,160,twenty,30,500,2",
    ]);
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(csv.as_bytes()).unwrap();

    let source = DataSource::File(file.path().to_path_buf());
    let err = RecordStore::load(&source, AirlineDirectory::standard(), TIMEOUT)
        .await
        .unwrap_err();
    match err {
        LoadError::MalformedRecord { context, .. } => {
            assert_eq!(context.row, Some(2));
            assert_eq!(context.column.as_deref(), Some("DEPARTURE_DELAY"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_file_is_source_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let source = DataSource::File(dir.path().join("absent.csv"));
    let err = RecordStore::load(&source, AirlineDirectory::standard(), TIMEOUT)
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::SourceUnavailable { .. }));
}
