//! SVG step chart renderer

use super::series::{extent, group_by_bank, BankSeries};
use super::{ChartError, ChartRenderer, Margins, Viewport};
use crate::feed::BankId;
use crate::spread::SpreadObservation;
use chrono::{Datelike, Duration, NaiveDate};
use plotters::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use std::path::Path;

/// Target tick count when widening the spread axis
const SPREAD_TICKS: usize = 10;

/// Renders spread series as a standalone SVG document
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    y_label: String,
    margins: Margins,
}

impl SvgRenderer {
    /// Create a renderer; the Y axis is labelled against `central_bank`
    pub fn new(central_bank: &str) -> Self {
        Self {
            y_label: format!("Spread in % above {}'s rate", central_bank),
            margins: Margins::default(),
        }
    }

    /// Override chart margins
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Render and write the document, replacing any previous file
    pub fn render_to_file(
        &self,
        observations: &[SpreadObservation],
        color_of: &dyn Fn(&BankId) -> RGBColor,
        viewport: Viewport,
        path: impl AsRef<Path>,
    ) -> Result<(), ChartError> {
        let svg = self.render(observations, color_of, viewport)?;
        std::fs::write(path.as_ref(), svg)?;
        tracing::info!(
            path = %path.as_ref().display(),
            width = viewport.width,
            height = viewport.height,
            "Chart written"
        );
        Ok(())
    }

    fn draw(
        &self,
        buf: &mut String,
        series: &[BankSeries],
        color_of: &dyn Fn(&BankId) -> RGBColor,
        viewport: Viewport,
    ) -> Result<(), ChartError> {
        let ((first, last), (lo, hi)) = extent(series).ok_or(ChartError::NoData)?;
        let last = if last == first { first + Duration::days(1) } else { last };
        let (y0, y1) = nice_bounds(
            lo.to_f64().unwrap_or_default(),
            hi.to_f64().unwrap_or_default(),
            SPREAD_TICKS,
        );

        let root = SVGBackend::with_string(buf, (viewport.width, viewport.height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let mut chart = ChartBuilder::on(&root)
            .margin_top(self.margins.top)
            .margin_right(self.margins.right)
            .x_label_area_size(self.margins.bottom)
            .y_label_area_size(self.margins.left)
            .build_cartesian_2d(day_coord(first)..day_coord(last), y0..y1)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_label_formatter(&|x: &f64| format_day(*x))
            .y_desc(self.y_label.as_str())
            .draw()
            .map_err(draw_err)?;

        for s in series {
            let color = color_of(&s.bank);
            let vertices = s
                .step_vertices()
                .into_iter()
                .map(|(date, spread)| (day_coord(date), spread));

            chart
                .draw_series(LineSeries::new(vertices, color.stroke_width(2)))
                .map_err(draw_err)?
                .label(s.bank.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
        Ok(())
    }
}

impl ChartRenderer for SvgRenderer {
    fn render(
        &self,
        observations: &[SpreadObservation],
        color_of: &dyn Fn(&BankId) -> RGBColor,
        viewport: Viewport,
    ) -> Result<String, ChartError> {
        viewport.check(&self.margins)?;

        let series = group_by_bank(observations);
        if series.is_empty() {
            return Err(ChartError::NoData);
        }

        let mut svg = String::new();
        self.draw(&mut svg, &series, color_of, viewport)?;

        tracing::debug!(
            banks = series.len(),
            bytes = svg.len(),
            "Chart rendered"
        );
        Ok(svg)
    }
}

fn draw_err(e: impl std::fmt::Display) -> ChartError {
    ChartError::Draw(e.to_string())
}

/// X coordinate of a date: days since the common era
fn day_coord(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

fn format_day(x: f64) -> String {
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
        .map(|d| d.format("%Y-%m").to_string())
        .unwrap_or_default()
}

/// Widen `[lo, hi]` outward to round tick multiples.
///
/// The step is 1, 2, 5 or 10 times a power of ten, chosen so the range
/// splits into roughly `ticks` intervals. A flat range is padded by 0.5
/// on both sides first.
pub fn nice_bounds(lo: f64, hi: f64, ticks: usize) -> (f64, f64) {
    let (lo, hi) = if hi - lo <= f64::EPSILON {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    };

    let raw_step = (hi - lo) / ticks.max(1) as f64;
    let power = 10f64.powf(raw_step.log10().floor());
    let error = raw_step / power;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    let step = factor * power;

    ((lo / step).floor() * step, (hi / step).ceil() * step)
}
