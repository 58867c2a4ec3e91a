//! End-to-end integration tests

use chrono::NaiveDate;
use rate_spread::chart::{ChartRenderer, ColorMap, SvgRenderer, Viewport};
use rate_spread::config::Config;
use rate_spread::feed::{load_observations, FileFeed};
use rate_spread::spread::{align_spreads, alignment_report};

#[test]
fn test_config_example_parses() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    assert_eq!(config.feed.central_bank_id, "Riksbanken");
    assert_eq!(config.chart.width, 960);
}

#[tokio::test]
async fn test_feed_to_chart() {
    let feed = FileFeed::new(concat!(env!("CARGO_MANIFEST_DIR"), "/rates.csv.example"));
    let raw = load_observations(&feed, "Riksbanken").await.unwrap();
    assert_eq!(raw.len(), 17);

    let now = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let aligned = align_spreads(&raw, now);
    let report = alignment_report(&raw, &aligned);
    assert_eq!(report.banks, 2);
    assert_eq!(report.central_bank_observations, 6);
    assert_eq!(report.undefined_spreads, 0);

    let colors = ColorMap::with_banks(aligned.iter().map(|o| &o.bank));
    let renderer = SvgRenderer::new("Riksbanken");
    let svg = renderer
        .render(&aligned, &|b| colors.color_of(b), Viewport::from_width(960, 0.5))
        .unwrap();

    assert!(svg.contains("SEB"));
    assert!(svg.contains("Nordea"));
}

#[test]
fn test_empty_feed_renders_nothing() {
    let now = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let aligned = align_spreads(&[], now);
    assert!(aligned.is_empty());

    let renderer = SvgRenderer::new("Riksbanken");
    let result = renderer.render(&aligned, &|_| rate_spread::chart::CATEGORY10[0], Viewport::new(800, 400));
    assert!(result.is_err());
}
