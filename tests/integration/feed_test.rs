//! Integration tests for feed loading

use rate_spread::feed::{load_observations, FeedError, FileFeed, Source};
use rust_decimal_macros::dec;
use std::io::Write;

#[tokio::test]
async fn test_load_observations_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "bank date rate\nRiksbanken 20230104 2.50\nSEB 20230110 4.25\n"
    )
    .unwrap();

    let feed = FileFeed::new(file.path());
    let observations = load_observations(&feed, "Riksbanken").await.unwrap();

    assert_eq!(observations.len(), 2);
    assert_eq!(observations[0].source, Source::CentralBank);
    assert_eq!(observations[1].rate, dec!(4.25));
}

#[tokio::test]
async fn test_malformed_row_aborts_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "bank date rate\nRiksbanken 20230104 2.50\nSEB 2023-01-10 4.25\n"
    )
    .unwrap();

    let feed = FileFeed::new(file.path());
    let err = load_observations(&feed, "Riksbanken").await.unwrap_err();
    assert!(matches!(err, FeedError::InvalidInput { line: 3, .. }));
}
