//! Rate aligner
//!
//! Merges the central bank series and each commercial bank series into one
//! chronological list of spread points. A point is emitted whenever a bank
//! changes its rate, and for every bank with a known rate whenever the
//! central bank changes its rate. Each bank line is finally extended to
//! `now` at its last known rate.

use super::history::RateHistory;
use super::types::{AlignmentReport, SpreadObservation};
use crate::feed::{BankId, RawObservation, Source};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Per-bank scan state
struct BankState {
    id: BankId,
    history: RateHistory,
    last_emitted: Option<(NaiveDate, Decimal)>,
}

/// Align bank rates against the central bank rate.
///
/// Pure function of its inputs: `now` is the date trailing points are
/// extended to. The output is ordered by date; within a date the scan order
/// is kept.
pub fn align_spreads(observations: &[RawObservation], now: NaiveDate) -> Vec<SpreadObservation> {
    if observations.is_empty() {
        tracing::warn!("Empty feed, nothing to align");
        return Vec::new();
    }

    let sorted = chronological(observations);
    let (mut banks, index) = index_banks(&sorted);

    let mut current_central: Option<Decimal> = None;
    let mut aligned = Vec::with_capacity(sorted.len() + banks.len());

    for obs in &sorted {
        match &obs.source {
            Source::CentralBank => {
                current_central = Some(obs.rate);
                for bank in banks.iter_mut() {
                    let Some(rate) = bank.history.advance_to(obs.date) else {
                        continue;
                    };
                    tracing::debug!(
                        bank = %bank.id,
                        date = %obs.date,
                        rate = %rate,
                        central = %obs.rate,
                        "Central bank move"
                    );
                    bank.last_emitted = Some((obs.date, rate));
                    aligned.push(SpreadObservation {
                        bank: bank.id.clone(),
                        date: obs.date,
                        rate,
                        spread: Some(rate - obs.rate),
                        is_central_bank_event: true,
                    });
                }
            }
            Source::Bank(id) => {
                if let Some(&idx) = index.get(id) {
                    banks[idx].last_emitted = Some((obs.date, obs.rate));
                }
                aligned.push(SpreadObservation {
                    bank: id.clone(),
                    date: obs.date,
                    rate: obs.rate,
                    spread: current_central.map(|central| obs.rate - central),
                    is_central_bank_event: false,
                });
            }
        }
    }

    match current_central {
        Some(central) => {
            for bank in &banks {
                let Some((last_date, last_rate)) = bank.last_emitted else {
                    continue;
                };
                if last_date < now {
                    aligned.push(SpreadObservation {
                        bank: bank.id.clone(),
                        date: now,
                        rate: last_rate,
                        spread: Some(last_rate - central),
                        is_central_bank_event: false,
                    });
                }
            }
        }
        None => tracing::warn!("No central bank rate in feed, all spreads undefined"),
    }

    // Trailing points may precede dates reported by other banks
    aligned.sort_by_key(|o| o.date);

    tracing::debug!(
        raw = observations.len(),
        banks = banks.len(),
        emitted = aligned.len(),
        "Alignment complete"
    );

    aligned
}

/// Summarize a raw feed and its aligned output
pub fn alignment_report(
    observations: &[RawObservation],
    aligned: &[SpreadObservation],
) -> AlignmentReport {
    let central_bank_observations = observations
        .iter()
        .filter(|o| o.source == Source::CentralBank)
        .count();
    let mut banks: Vec<&BankId> = observations.iter().filter_map(|o| o.source.bank()).collect();
    banks.sort();
    banks.dedup();

    AlignmentReport {
        raw_observations: observations.len(),
        central_bank_observations,
        banks: banks.len(),
        emitted: aligned.len(),
        central_bank_events: aligned.iter().filter(|o| o.is_central_bank_event).count(),
        undefined_spreads: aligned.iter().filter(|o| o.spread.is_none()).count(),
    }
}

/// Stable chronological order. On a shared date the central bank goes first,
/// so a bank rate published that day is measured against that day's policy
/// rate; all other ties keep input order.
fn chronological(observations: &[RawObservation]) -> Vec<&RawObservation> {
    let mut sorted: Vec<&RawObservation> = observations.iter().collect();
    sorted.sort_by_key(|o| (o.date, o.source != Source::CentralBank));
    sorted
}

/// Distinct banks in order of first appearance, each with its rate history
fn index_banks(sorted: &[&RawObservation]) -> (Vec<BankState>, HashMap<BankId, usize>) {
    let mut banks: Vec<BankState> = Vec::new();
    let mut index: HashMap<BankId, usize> = HashMap::new();

    for obs in sorted {
        let Source::Bank(id) = &obs.source else {
            continue;
        };
        let idx = *index.entry(id.clone()).or_insert_with(|| {
            banks.push(BankState {
                id: id.clone(),
                history: RateHistory::new(),
                last_emitted: None,
            });
            banks.len() - 1
        });
        banks[idx].history.push(obs.date, obs.rate);
    }

    (banks, index)
}
