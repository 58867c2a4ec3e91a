//! rate-spread: mortgage rate spread over the central bank policy rate
//!
//! This library provides the core components for:
//! - Loading a whitespace-delimited rate feed from a file or URL
//! - Aligning commercial bank rates against the central bank rate
//! - Rendering each bank's spread as a step chart (SVG)
//! - Configuration and structured logging

pub mod chart;
pub mod cli;
pub mod config;
pub mod feed;
pub mod spread;
pub mod telemetry;
