use doping_scatter::api::{DOPING_ALLEGATION_COLOR, NO_ALLEGATION_COLOR};
use doping_scatter::core::Viewport;
use doping_scatter::data::DEFAULT_DATASET_URL;
use doping_scatter::render::{Color, NullRenderer};
use doping_scatter::{PlotError, ScatterPlot, ScatterPlotConfig};

#[test]
fn defaults_match_published_chart() {
    let config = ScatterPlotConfig::default();
    assert_eq!(config.viewport, Viewport::new(940, 700));
    assert_eq!(config.padding.horizontal, 80.0);
    assert_eq!(config.padding.vertical, 100.0);
    assert_eq!(config.marker_radius_px, 6.0);
    assert_eq!(config.dataset_url, DEFAULT_DATASET_URL);
    assert_eq!(config.doping_color.to_hex(), "#3741ceb4");
    assert_eq!(config.clean_color.to_hex(), "#15dbcbe3");
}

#[test]
fn marker_fill_depends_on_allegation() {
    let config = ScatterPlotConfig::default();
    assert_eq!(config.marker_fill(true), DOPING_ALLEGATION_COLOR);
    assert_eq!(config.marker_fill(false), NO_ALLEGATION_COLOR);
}

#[test]
fn partial_json_takes_defaults_for_missing_fields() {
    let config = ScatterPlotConfig::from_json_str(
        r#"{"viewport":{"width":1200,"height":800},"strict_tick_labels":false}"#,
    )
    .expect("parse config");

    assert_eq!(config.viewport, Viewport::new(1200, 800));
    assert!(!config.strict_tick_labels);
    assert_eq!(config.marker_radius_px, 6.0);
    assert_eq!(config.dataset_url, DEFAULT_DATASET_URL);
}

#[test]
fn config_json_round_trip() {
    let config = ScatterPlotConfig::default()
        .with_padding(60.0, 90.0)
        .with_marker_radius_px(4.5)
        .with_dataset_url("https://example.invalid/cyclists.json")
        .with_strict_tick_labels(true);

    let json = config.to_json_pretty().expect("serialize");
    let parsed = ScatterPlotConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn malformed_json_is_rejected() {
    let err = ScatterPlotConfig::from_json_str("{ viewport: ").expect_err("invalid json");
    assert!(matches!(err, PlotError::InvalidData(_)));
}

#[test]
fn plot_rejects_invalid_config() {
    let bad_radius = ScatterPlotConfig::default().with_marker_radius_px(0.0);
    assert!(ScatterPlot::new(NullRenderer::default(), bad_radius).is_err());

    let bad_color = ScatterPlotConfig::default()
        .with_colors(Color::rgba(2.0, 0.0, 0.0, 1.0), NO_ALLEGATION_COLOR);
    assert!(ScatterPlot::new(NullRenderer::default(), bad_color).is_err());

    let tiny = ScatterPlotConfig::default().with_viewport(Viewport::new(100, 100));
    assert!(ScatterPlot::new(NullRenderer::default(), tiny).is_err());
}

#[test]
fn custom_viewport_moves_plot_area() {
    let config = ScatterPlotConfig::default()
        .with_viewport(Viewport::new(1000, 600))
        .with_padding(50.0, 50.0);
    let plot = ScatterPlot::new(NullRenderer::default(), config).expect("plot init");
    let area = plot.plot_area();
    assert_eq!(area.horizontal_range(), (50.0, 950.0));
    assert_eq!(area.vertical_range(), (50.0, 550.0));
}

#[test]
fn hex_colors_parse_with_optional_alpha() {
    assert_eq!(
        Color::from_hex("#3741ceb4").expect("rgba hex"),
        DOPING_ALLEGATION_COLOR
    );
    assert_eq!(Color::from_hex("#000000").expect("rgb hex").alpha, 1.0);
    assert!(Color::from_hex("3741ce").is_err());
    assert!(Color::from_hex("#37g1ce").is_err());
}
