//! Configuration types for rate-spread

use crate::chart::DEFAULT_ASPECT_RATIO;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Rate feed configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedConfig {
    /// File path or http(s) URL of the rate table
    #[serde(default = "default_source")]
    pub source: String,

    /// Source identifier used by the central bank in the feed
    #[serde(default = "default_central_bank_id")]
    pub central_bank_id: String,
}

fn default_source() -> String {
    "rates.csv".to_string()
}
fn default_central_bank_id() -> String {
    "Riksbanken".to_string()
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            central_bank_id: default_central_bank_id(),
        }
    }
}

/// Chart output configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChartConfig {
    /// Chart width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Height as a fraction of width
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: f64,

    /// Where `render` writes the SVG
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_width() -> u32 {
    960
}
fn default_aspect_ratio() -> f64 {
    DEFAULT_ASPECT_RATIO
}
fn default_output() -> PathBuf {
    PathBuf::from("spread.svg")
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            aspect_ratio: default_aspect_ratio(),
            output: default_output(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format
    #[default]
    Pretty,
    /// JSON format for log aggregation
    Json,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
