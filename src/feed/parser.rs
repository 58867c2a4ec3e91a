//! Whitespace-delimited rate feed parser
//!
//! Layout: one header line, then `source_id date_yyyymmdd rate` per line.
//! ```text
//! bank date rate
//! Riksbanken 20230104 2.50
//! SEB 20230110 4.25
//! ```

use super::types::{BankId, FeedError, RawObservation, Source};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Number of fields on every data row
const FIELD_COUNT: usize = 3;

/// Parse a whole feed into raw observations.
///
/// The first non-blank line is the header and is ignored. Rows whose source
/// equals `central_bank_id` become central bank observations. Any malformed
/// row rejects the whole feed.
pub fn parse_feed(text: &str, central_bank_id: &str) -> Result<Vec<RawObservation>, FeedError> {
    let mut rows = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    // Header
    if rows.next().is_none() {
        return Ok(Vec::new());
    }

    rows.map(|(line_no, line)| parse_row(line_no, line, central_bank_id))
        .collect()
}

/// Parse a single data row
pub fn parse_row(
    line_no: usize,
    line: &str,
    central_bank_id: &str,
) -> Result<RawObservation, FeedError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != FIELD_COUNT {
        return Err(FeedError::invalid(
            line_no,
            format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
        ));
    }

    let source = if fields[0] == central_bank_id {
        Source::CentralBank
    } else {
        Source::Bank(BankId::new(fields[0]))
    };
    let date = parse_date(fields[1])
        .ok_or_else(|| FeedError::invalid(line_no, format!("invalid date '{}'", fields[1])))?;
    let rate = parse_rate(fields[2])
        .ok_or_else(|| FeedError::invalid(line_no, format!("invalid rate '{}'", fields[2])))?;

    Ok(RawObservation { source, date, rate })
}

/// Parse an 8-digit `yyyymmdd` date
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = raw[0..4].parse().ok()?;
    let month = raw[4..6].parse().ok()?;
    let day = raw[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse a rate in plain or scientific notation
pub fn parse_rate(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}
