//! Render command implementation

use super::{load_spreads, FeedArgs};
use crate::chart::{ColorMap, SvgRenderer, Viewport};
use crate::config::Config;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub feed: FeedArgs,

    /// Output SVG path (overrides config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Chart width in pixels (overrides config)
    #[arg(long)]
    pub width: Option<u32>,

    /// Chart height in pixels (default: width x aspect ratio)
    #[arg(long)]
    pub height: Option<u32>,
}

impl RenderArgs {
    /// Viewport from arguments, falling back to config
    pub fn viewport(&self, config: &Config) -> Viewport {
        let width = self.width.unwrap_or(config.chart.width);
        match self.height {
            Some(height) => Viewport::new(width, height),
            None => Viewport::from_width(width, config.chart.aspect_ratio),
        }
    }

    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let (_, aligned) = load_spreads(&self.feed, &config.feed).await?;

        let colors = ColorMap::with_banks(aligned.iter().map(|o| &o.bank));
        let renderer = SvgRenderer::new(&config.feed.central_bank_id);
        let output = self.output.as_ref().unwrap_or(&config.chart.output);

        renderer.render_to_file(
            &aligned,
            &|bank| colors.color_of(bank),
            self.viewport(config),
            output,
        )?;
        Ok(())
    }
}
