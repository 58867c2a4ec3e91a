//! Rate feed module
//!
//! Fetches the raw rate table and parses it into observations

mod parser;
mod source;
mod types;

pub use parser::{parse_date, parse_feed, parse_rate, parse_row};
pub use source::{feed_from_location, FileFeed, HttpFeed};
pub use types::{BankId, FeedError, RawObservation, Source};

use async_trait::async_trait;

/// Trait for raw feed sources
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the full feed text
    async fn fetch(&self) -> Result<String, FeedError>;

    /// Human-readable location, for logs
    fn describe(&self) -> String;
}

/// Fetch and parse a feed.
///
/// Parsing starts only after the fetch completes; a malformed row aborts the
/// load with no partial result.
pub async fn load_observations(
    source: &dyn FeedSource,
    central_bank_id: &str,
) -> Result<Vec<RawObservation>, FeedError> {
    let text = source.fetch().await?;
    let observations = parse_feed(&text, central_bank_id)?;

    let central = observations
        .iter()
        .filter(|o| o.source == Source::CentralBank)
        .count();
    tracing::info!(
        feed = %source.describe(),
        observations = observations.len(),
        central_bank = central,
        "Feed loaded"
    );

    Ok(observations)
}
