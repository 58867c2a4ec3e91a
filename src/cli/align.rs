//! Align command implementation

use super::{load_spreads, FeedArgs};
use crate::config::Config;
use crate::spread::SpreadObservation;
use clap::{Args, ValueEnum};
use std::fmt::Write;

/// Output format for the aligned series
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width text table
    Table,
    /// JSON array
    Json,
}

#[derive(Args, Debug)]
pub struct AlignArgs {
    #[command(flatten)]
    pub feed: FeedArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

impl AlignArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let (_, aligned) = load_spreads(&self.feed, &config.feed).await?;

        let output = match self.format {
            OutputFormat::Table => format_table(&aligned),
            OutputFormat::Json => serde_json::to_string_pretty(&aligned)?,
        };
        println!("{}", output);
        Ok(())
    }
}

/// Render observations as a text table
pub fn format_table(observations: &[SpreadObservation]) -> String {
    let bank_width = observations
        .iter()
        .map(|o| o.bank.as_str().len())
        .max()
        .unwrap_or(0)
        .max("bank".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10}  {:<bank_width$}  {:>8}  {:>8}  event",
        "date", "bank", "rate", "spread"
    );
    for o in observations {
        let spread = o
            .spread
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        let event = if o.is_central_bank_event { "central" } else { "" };
        let _ = writeln!(
            out,
            "{:<10}  {:<bank_width$}  {:>8}  {:>8}  {}",
            o.date.format("%Y-%m-%d"),
            o.bank.as_str(),
            o.rate.to_string(),
            spread,
            event
        );
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::BankId;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_table() {
        let observations = vec![
            SpreadObservation {
                bank: BankId::new("Nordea"),
                date: NaiveDate::from_ymd_opt(2023, 1, 10).unwrap(),
                rate: dec!(4.25),
                spread: None,
                is_central_bank_event: false,
            },
            SpreadObservation {
                bank: BankId::new("Nordea"),
                date: NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
                rate: dec!(4.25),
                spread: Some(dec!(1.75)),
                is_central_bank_event: true,
            },
        ];
        let table = format_table(&observations);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("date"));
        assert!(lines[1].contains("2023-01-10"));
        assert!(lines[1].contains(" -"));
        assert!(lines[2].contains("1.75"));
        assert!(lines[2].ends_with("central"));
    }

    #[test]
    fn test_format_table_empty() {
        let table = format_table(&[]);
        assert_eq!(table.lines().count(), 1);
    }
}
