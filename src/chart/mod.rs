//! Chart rendering module
//!
//! Draws each bank's spread as a step line over time

mod color;
mod series;
mod svg;

pub use color::{ColorMap, CATEGORY10};
pub use series::{extent, group_by_bank, step_after, BankSeries};
pub use svg::{nice_bounds, SvgRenderer};

use crate::feed::BankId;
use crate::spread::SpreadObservation;
use plotters::style::RGBColor;
use thiserror::Error;

/// Default height-to-width ratio of the chart
pub const DEFAULT_ASPECT_RATIO: f64 = 0.5;

/// Chart rendering errors
#[derive(Debug, Error)]
pub enum ChartError {
    /// No observation carries a defined spread
    #[error("Nothing to plot: no observation has a defined spread")]
    NoData,
    /// Viewport too small for the chart margins
    #[error("Viewport {width}x{height} too small for chart margins")]
    Viewport { width: u32, height: u32 },
    /// Drawing backend failure
    #[error("Drawing failed: {0}")]
    Draw(String),
    /// Writing the output failed
    #[error("Failed to write chart: {0}")]
    Io(#[from] std::io::Error),
}

/// Pixel size of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Create a viewport
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Viewport with height derived from width
    pub fn from_width(width: u32, aspect_ratio: f64) -> Self {
        let height = (width as f64 * aspect_ratio).round().max(0.0) as u32;
        Self { width, height }
    }

    /// Ensure the plot area left inside `margins` is non-empty
    pub fn check(&self, margins: &Margins) -> Result<(), ChartError> {
        let fits = self.width > margins.left + margins.right
            && self.height > margins.top + margins.bottom;
        if fits {
            Ok(())
        } else {
            Err(ChartError::Viewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Space reserved around the plot area, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20,
            right: 20,
            bottom: 30,
            left: 50,
        }
    }
}

/// Trait for chart renderers.
///
/// Every call draws the complete chart from scratch for the given viewport;
/// nothing is carried over from earlier calls.
pub trait ChartRenderer {
    /// Render observations, skipping points without a defined spread
    fn render(
        &self,
        observations: &[SpreadObservation],
        color_of: &dyn Fn(&BankId) -> RGBColor,
        viewport: Viewport,
    ) -> Result<String, ChartError>;
}
