//! Per-bank rate history with a forward-only cursor

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A bank's published rates in chronological order.
///
/// The cursor only moves forward, so a full chronological scan asking
/// "latest rate on or before D" for non-decreasing D costs O(n) overall.
#[derive(Debug, Clone, Default)]
pub struct RateHistory {
    entries: Vec<(NaiveDate, Decimal)>,
    cursor: usize,
}

impl RateHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rate. Entries must arrive in non-decreasing date order.
    pub fn push(&mut self, date: NaiveDate, rate: Decimal) {
        debug_assert!(self.entries.last().map_or(true, |(d, _)| *d <= date));
        self.entries.push((date, rate));
    }

    /// Latest rate published on or before `date`.
    ///
    /// Same-day entries resolve to the last one pushed. Calls must use
    /// non-decreasing dates.
    pub fn advance_to(&mut self, date: NaiveDate) -> Option<Decimal> {
        while self
            .entries
            .get(self.cursor)
            .is_some_and(|(d, _)| *d <= date)
        {
            self.cursor += 1;
        }
        self.cursor
            .checked_sub(1)
            .and_then(|idx| self.entries.get(idx))
            .map(|(_, rate)| *rate)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bank never published a rate
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
