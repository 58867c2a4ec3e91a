//! Property tests for the rate aligner

use chrono::NaiveDate;
use rate_spread::feed::{BankId, RawObservation, Source};
use rate_spread::spread::{align_spreads, SpreadObservation};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// Interleaved feed with two banks, shuffled relative to date order
fn sample_feed() -> Vec<RawObservation> {
    vec![
        RawObservation::bank("SEB", d(2022, 5, 2), dec!(2.10)),
        RawObservation::central(d(2022, 4, 28), dec!(0.25)),
        RawObservation::bank("Nordea", d(2022, 5, 5), dec!(2.05)),
        RawObservation::central(d(2022, 6, 30), dec!(0.75)),
        RawObservation::bank("SEB", d(2022, 7, 4), dec!(2.69)),
        RawObservation::central(d(2022, 9, 20), dec!(1.75)),
        RawObservation::central(d(2022, 11, 24), dec!(2.50)),
        RawObservation::bank("Nordea", d(2022, 11, 29), dec!(4.30)),
        RawObservation::bank("Handelsbanken", d(2022, 4, 1), dec!(1.90)),
    ]
}

/// Most recent central bank rate on or before `date`
fn central_in_effect(raw: &[RawObservation], date: NaiveDate) -> Option<Decimal> {
    let mut central: Vec<&RawObservation> = raw
        .iter()
        .filter(|o| o.source == Source::CentralBank && o.date <= date)
        .collect();
    central.sort_by_key(|o| o.date);
    central.last().map(|o| o.rate)
}

fn per_bank<'a>(aligned: &'a [SpreadObservation], bank: &str) -> Vec<&'a SpreadObservation> {
    aligned.iter().filter(|o| o.bank.as_str() == bank).collect()
}

#[test]
fn test_idempotent() {
    let raw = sample_feed();
    let now = d(2023, 1, 1);
    assert_eq!(align_spreads(&raw, now), align_spreads(&raw, now));
}

#[test]
fn test_dates_monotonic_per_bank() {
    let aligned = align_spreads(&sample_feed(), d(2023, 1, 1));
    for bank in ["SEB", "Nordea", "Handelsbanken"] {
        let dates: Vec<_> = per_bank(&aligned, bank).iter().map(|o| o.date).collect();
        assert!(dates.windows(2).all(|w| w[0] <= w[1]), "{bank}: {dates:?}");
    }
}

#[test]
fn test_spread_matches_central_rate_in_effect() {
    let raw = sample_feed();
    let aligned = align_spreads(&raw, d(2023, 1, 1));

    for obs in &aligned {
        if let Some(spread) = obs.spread {
            let central = central_in_effect(&raw, obs.date).expect("central rate in effect");
            assert_eq!(spread, obs.rate - central, "{obs:?}");
        }
    }
}

#[test]
fn test_absence_before_first_central_rate() {
    let raw = sample_feed();
    let aligned = align_spreads(&raw, d(2023, 1, 1));

    let before: Vec<_> = aligned.iter().filter(|o| o.date < d(2022, 4, 28)).collect();
    assert_eq!(before.len(), 1);
    assert_eq!(before[0].bank, BankId::new("Handelsbanken"));
    assert!(before[0].spread.is_none());
}

#[test]
fn test_every_bank_reaches_now() {
    let now = d(2023, 1, 1);
    let aligned = align_spreads(&sample_feed(), now);

    for bank in ["SEB", "Nordea", "Handelsbanken"] {
        let last = *per_bank(&aligned, bank).last().unwrap();
        assert_eq!(last.date, now);
        assert_eq!(last.spread, Some(last.rate - dec!(2.50)));
        assert!(!last.is_central_bank_event);
    }
}

#[test]
fn test_central_bank_events_use_raw_history() {
    let aligned = align_spreads(&sample_feed(), d(2023, 1, 1));
    let events: Vec<_> = aligned
        .iter()
        .filter(|o| o.is_central_bank_event && o.date == d(2022, 9, 20))
        .map(|o| (o.bank.as_str(), o.rate, o.spread))
        .collect();

    assert_eq!(
        events,
        vec![
            ("Handelsbanken", dec!(1.90), Some(dec!(0.15))),
            ("SEB", dec!(2.69), Some(dec!(0.94))),
            ("Nordea", dec!(2.05), Some(dec!(0.30))),
        ]
    );
}

#[test]
fn test_trailing_and_propagation_scenarios() {
    // Trailing point
    let raw = vec![
        RawObservation::central(d(2020, 1, 1), dec!(1.0)),
        RawObservation::bank("A", d(2020, 1, 1), dec!(3.0)),
    ];
    let aligned = align_spreads(&raw, d(2020, 6, 1));
    assert!(aligned
        .iter()
        .any(|o| o.bank.as_str() == "A" && o.date == d(2020, 6, 1) && o.spread == Some(dec!(2.0))));

    // Central bank change propagation
    let raw = vec![
        RawObservation::central(d(2020, 1, 1), dec!(1.0)),
        RawObservation::central(d(2020, 2, 1), dec!(2.0)),
        RawObservation::bank("A", d(2020, 1, 1), dec!(3.0)),
    ];
    let aligned = align_spreads(&raw, d(2020, 6, 1));
    assert!(aligned.iter().any(|o| o.date == d(2020, 2, 1)
        && o.rate == dec!(3.0)
        && o.spread == Some(dec!(1.0))
        && o.is_central_bank_event));
}
