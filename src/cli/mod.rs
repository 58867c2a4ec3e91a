//! CLI interface for rate-spread
//!
//! Provides subcommands for:
//! - `align`: Print the aligned spread series
//! - `render`: Draw the spread chart as SVG
//! - `config`: Show the effective configuration

mod align;
mod render;

pub use align::{AlignArgs, OutputFormat};
pub use render::RenderArgs;

use crate::config::FeedConfig;
use crate::feed::{feed_from_location, load_observations, RawObservation};
use crate::spread::{align_spreads, alignment_report, SpreadObservation};
use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rate-spread")]
#[command(about = "Mortgage rate spread over the central bank policy rate")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the aligned spread series
    Align(AlignArgs),
    /// Render the spread chart as SVG
    Render(RenderArgs),
    /// Show configuration
    Config,
}

/// Feed selection shared by subcommands
#[derive(Args, Debug, Clone)]
pub struct FeedArgs {
    /// Feed file path or http(s) URL (overrides config)
    #[arg(short, long)]
    pub feed: Option<String>,

    /// Date lines are extended to (YYYY-MM-DD, default today)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

impl FeedArgs {
    /// Feed location, falling back to the configured one
    pub fn location<'a>(&'a self, config: &'a FeedConfig) -> &'a str {
        self.feed.as_deref().unwrap_or(&config.source)
    }

    /// Alignment date
    pub fn now(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Fetch, parse and align the feed
pub async fn load_spreads(
    args: &FeedArgs,
    config: &FeedConfig,
) -> anyhow::Result<(Vec<RawObservation>, Vec<SpreadObservation>)> {
    let location = args.location(config);
    let source = feed_from_location(location);
    let raw = load_observations(source.as_ref(), &config.central_bank_id)
        .await
        .with_context(|| format!("Loading feed {}", location))?;

    let now = args.now();
    let aligned = align_spreads(&raw, now);
    let report = alignment_report(&raw, &aligned);
    tracing::info!(
        now = %now,
        banks = report.banks,
        emitted = report.emitted,
        central_bank_events = report.central_bank_events,
        undefined_spreads = report.undefined_spreads,
        "Spreads aligned"
    );

    Ok((raw, aligned))
}
