//! Spread series types

use crate::feed::BankId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bank's rate and its spread over the central bank at one date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadObservation {
    /// Bank the point belongs to
    pub bank: BankId,
    /// Date the point applies from
    pub date: NaiveDate,
    /// Bank rate in effect at `date`
    pub rate: Decimal,
    /// `rate` minus the central bank rate in effect; `None` before the
    /// central bank has published anything
    pub spread: Option<Decimal>,
    /// Point was synthesized because the central bank moved
    pub is_central_bank_event: bool,
}

/// Diagnostics about an aligned series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlignmentReport {
    /// Raw observations fed in
    pub raw_observations: usize,
    /// Central bank observations among them
    pub central_bank_observations: usize,
    /// Distinct commercial banks
    pub banks: usize,
    /// Points emitted
    pub emitted: usize,
    /// Points synthesized from central bank moves
    pub central_bank_events: usize,
    /// Points without a defined spread
    pub undefined_spreads: usize,
}

impl AlignmentReport {
    /// No observations at all
    pub fn is_empty_feed(&self) -> bool {
        self.raw_observations == 0
    }

    /// Observations present but none from the central bank
    pub fn lacks_central_bank_rate(&self) -> bool {
        self.raw_observations > 0 && self.central_bank_observations == 0
    }
}
