//! Raw feed types

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Identifier of a commercial bank as it appears in the feed
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BankId(String);

impl BankId {
    /// Create a bank identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BankId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for BankId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Who published a rate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// The central bank's policy rate
    CentralBank,
    /// A commercial bank's mortgage rate
    Bank(BankId),
}

impl Source {
    /// Bank identifier, if this is a commercial bank
    pub fn bank(&self) -> Option<&BankId> {
        match self {
            Source::CentralBank => None,
            Source::Bank(id) => Some(id),
        }
    }
}

/// A single published rate, as read from the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawObservation {
    /// Publisher of the rate
    pub source: Source,
    /// Date the rate took effect
    pub date: NaiveDate,
    /// Rate in percent
    pub rate: Decimal,
}

impl RawObservation {
    /// Central bank observation
    pub fn central(date: NaiveDate, rate: Decimal) -> Self {
        Self {
            source: Source::CentralBank,
            date,
            rate,
        }
    }

    /// Commercial bank observation
    pub fn bank(bank: impl Into<BankId>, date: NaiveDate, rate: Decimal) -> Self {
        Self {
            source: Source::Bank(bank.into()),
            date,
            rate,
        }
    }
}

/// Feed loading errors
#[derive(Debug, Error)]
pub enum FeedError {
    /// A row could not be parsed
    #[error("Invalid input on line {line}: {reason}")]
    InvalidInput { line: usize, reason: String },
    /// Reading a local feed failed
    #[error("Failed to read feed {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Fetching a remote feed failed
    #[error("Failed to fetch feed: {0}")]
    Http(#[from] reqwest::Error),
    /// Remote feed answered with a non-success status
    #[error("Feed server returned {status} for {url}")]
    Status { url: String, status: u16 },
}

impl FeedError {
    pub(crate) fn invalid(line: usize, reason: impl Into<String>) -> Self {
        FeedError::InvalidInput {
            line,
            reason: reason.into(),
        }
    }
}
