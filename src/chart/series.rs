//! Plot-ready series: grouping by bank and step expansion

use crate::feed::BankId;
use crate::spread::SpreadObservation;
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// One bank's plottable spread points, sorted by date
#[derive(Debug, Clone, PartialEq)]
pub struct BankSeries {
    pub bank: BankId,
    pub points: Vec<(NaiveDate, Decimal)>,
}

impl BankSeries {
    /// Step-after vertices of this series as `(date, spread)` pairs
    pub fn step_vertices(&self) -> Vec<(NaiveDate, f64)> {
        step_after(&self.points)
            .into_iter()
            .filter_map(|(date, spread)| spread.to_f64().map(|v| (date, v)))
            .collect()
    }
}

/// Group observations by bank, in order of first appearance.
///
/// Points without a defined spread are dropped; banks left with no points
/// are omitted. Each group is sorted by date (stable).
pub fn group_by_bank(observations: &[SpreadObservation]) -> Vec<BankSeries> {
    let mut groups: Vec<BankSeries> = Vec::new();

    for obs in observations {
        let Some(spread) = obs.spread else {
            continue;
        };
        match groups.iter_mut().find(|g| g.bank == obs.bank) {
            Some(group) => group.points.push((obs.date, spread)),
            None => groups.push(BankSeries {
                bank: obs.bank.clone(),
                points: vec![(obs.date, spread)],
            }),
        }
    }

    for group in &mut groups {
        group.points.sort_by_key(|(date, _)| *date);
    }
    groups
}

/// Expand points into a right-continuous staircase.
///
/// Each value holds until the next point's date, where the line jumps
/// vertically: `(d0,v0) (d1,v0) (d1,v1) (d2,v1) (d2,v2) ...`
pub fn step_after<T: Copy>(points: &[(NaiveDate, T)]) -> Vec<(NaiveDate, T)> {
    let mut out = Vec::with_capacity(points.len() * 2);
    for (i, &(date, value)) in points.iter().enumerate() {
        if i > 0 {
            let (_, prev) = points[i - 1];
            out.push((date, prev));
        }
        out.push((date, value));
    }
    out
}

/// Date and spread extent over all series
pub fn extent(series: &[BankSeries]) -> Option<((NaiveDate, NaiveDate), (Decimal, Decimal))> {
    let mut points = series.iter().flat_map(|s| s.points.iter());
    let &(first_date, first_spread) = points.next()?;
    let init = ((first_date, first_date), (first_spread, first_spread));

    Some(points.fold(init, |((d0, d1), (s0, s1)), &(date, spread)| {
        ((d0.min(date), d1.max(date)), (s0.min(spread), s1.max(spread)))
    }))
}
