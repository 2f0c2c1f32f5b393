use approx::assert_relative_eq;
use doping_scatter::api::{
    CLEAN_LEGEND_TEXT, DOPING_ALLEGATION_COLOR, DOPING_LEGEND_TEXT, NO_ALLEGATION_COLOR,
    SUBTITLE_TEXT, TITLE_TEXT, X_AXIS_LABEL_COUNT, Y_AXIS_TITLE_TEXT,
};
use doping_scatter::core::Record;
use doping_scatter::render::{AxisOrientation, MarkerPrimitive, NullRenderer};
use doping_scatter::{ScatterPlot, ScatterPlotConfig};

fn two_record_plot() -> ScatterPlot<NullRenderer> {
    let mut plot =
        ScatterPlot::new(NullRenderer::default(), ScatterPlotConfig::default()).expect("plot init");
    plot.set_records(vec![
        Record::new(1994, "36:50", 2210, "A", "X"),
        Record::new(1996, "36:55", 2215, "B", "Y").with_doping("Alleged doping"),
    ]);
    plot
}

#[test]
fn markers_follow_record_order_with_allegation_fill() {
    let plot = two_record_plot();
    let frame = plot.build_scene().expect("scene");

    assert_eq!(frame.markers.len(), 2);

    let first = frame.marker(0).expect("first marker");
    assert_relative_eq!(first.cx, 275.0, epsilon = 1e-9);
    assert_relative_eq!(first.cy, 100.0, epsilon = 1e-9);
    assert_eq!(first.fill, NO_ALLEGATION_COLOR);
    assert_eq!(first.radius, 6.0);

    let second = frame.marker(1).expect("second marker");
    assert_relative_eq!(second.cx, 665.0, epsilon = 1e-9);
    assert_relative_eq!(second.cy, 600.0, epsilon = 1e-9);
    assert_eq!(second.fill, DOPING_ALLEGATION_COLOR);
}

#[test]
fn markers_expose_index_year_and_iso_time() {
    let plot = two_record_plot();
    let frame = plot.build_scene().expect("scene");

    let attributes = frame.marker(0).expect("marker").data_attributes();
    let pairs: Vec<(&str, &str)> = attributes
        .iter()
        .map(|(name, value)| (*name, value.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("data-index", "0"),
            ("data-xvalue", "1994"),
            ("data-yvalue", "1970-01-01T00:36:50.000Z"),
        ]
    );
    assert_eq!(MarkerPrimitive::CLASS_NAME, "dot");
}

#[test]
fn scene_contains_titles_legend_and_axes() {
    let plot = two_record_plot();
    let frame = plot.build_scene().expect("scene");

    let title = frame.text("title").expect("title");
    assert_eq!(title.text, TITLE_TEXT);
    assert_eq!((title.x, title.y), (230.0, 40.0));

    let subtitle = frame.text("sub-title").expect("sub-title");
    assert_eq!(subtitle.text, SUBTITLE_TEXT);
    assert_eq!((subtitle.x, subtitle.y), (355.0, 64.0));

    let y_title = frame.text("legend").expect("y-axis title");
    assert_eq!(y_title.text, Y_AXIS_TITLE_TEXT);
    assert_eq!(y_title.rotation_deg, -90.0);
    assert_eq!((y_title.x, y_title.y), (-250.0, 35.0));

    assert_eq!(frame.rects.len(), 2);
    assert_eq!((frame.rects[0].x, frame.rects[0].y), (800.0, 250.0));
    assert_eq!(frame.rects[0].fill_color, DOPING_ALLEGATION_COLOR);
    assert_eq!((frame.rects[1].x, frame.rects[1].y), (800.0, 280.0));
    assert_eq!(frame.rects[1].fill_color, NO_ALLEGATION_COLOR);
    assert!(frame.texts.iter().any(|text| text.text == DOPING_LEGEND_TEXT));
    assert!(frame.texts.iter().any(|text| text.text == CLEAN_LEGEND_TEXT));

    let x_axis = frame.axis("x-axis").expect("x axis");
    assert_eq!(x_axis.orientation, AxisOrientation::Bottom);
    assert_eq!((x_axis.translate_x, x_axis.translate_y), (0.0, 600.0));

    let y_axis = frame.axis("y-axis").expect("y axis");
    assert_eq!(y_axis.orientation, AxisOrientation::Left);
    assert_eq!((y_axis.translate_x, y_axis.translate_y), (80.0, 0.0));

    frame.validate().expect("valid frame");
}

#[test]
fn x_axis_labels_are_assigned_by_tick_position() {
    let plot = two_record_plot();
    let frame = plot.build_scene().expect("scene");
    let x_axis = frame.axis("x-axis").expect("x axis");

    // Half-year ticks over 1993..1997 still read 1994, 1996, ...
    assert_eq!(x_axis.ticks.len(), 9);
    assert_eq!(x_axis.ticks[0].label, "1994");
    assert_eq!(x_axis.ticks[1].label, "1996");
    assert_relative_eq!(x_axis.ticks[0].offset, 80.0, epsilon = 1e-9);
}

#[test]
fn empty_record_set_draws_axes_on_fallback_domains() {
    let mut plot =
        ScatterPlot::new(NullRenderer::default(), ScatterPlotConfig::default()).expect("plot init");
    let frame = plot.build_scene().expect("scene");

    assert!(frame.markers.is_empty());

    let x_axis = frame.axis("x-axis").expect("x axis");
    assert_eq!(x_axis.ticks.len(), X_AXIS_LABEL_COUNT);
    assert_eq!(x_axis.ticks[0].label, "1994");
    assert_eq!(x_axis.ticks[12].label, "2018");

    let y_axis = frame.axis("y-axis").expect("y axis");
    assert_eq!(y_axis.ticks.len(), 15);
    assert_eq!(y_axis.ticks[0].label, "36:30");
    assert_eq!(y_axis.ticks[14].label, "40:00");

    plot.render().expect("render");
    assert_eq!(plot.renderer().render_count, 1);
    assert_eq!(plot.renderer().last_marker_count, 0);
    assert!(!plot.needs_render());
}

#[test]
fn y_axis_ticks_sit_on_quarter_minutes() {
    let mut plot =
        ScatterPlot::new(NullRenderer::default(), ScatterPlotConfig::default()).expect("plot init");
    plot.set_records(vec![
        Record::new(1997, "37:02", 2222, "Fast", "ITA"),
        Record::new(2003, "38:16", 2296, "Slow", "ESP"),
    ]);

    let frame = plot.build_scene().expect("scene");
    let labels: Vec<&str> = frame
        .axis("y-axis")
        .expect("y axis")
        .ticks
        .iter()
        .map(|tick| tick.label.as_str())
        .collect();
    assert_eq!(labels, vec!["37:15", "37:30", "37:45", "38:00", "38:15"]);
}

#[test]
fn record_with_malformed_time_gets_no_marker() {
    let mut plot =
        ScatterPlot::new(NullRenderer::default(), ScatterPlotConfig::default()).expect("plot init");
    plot.set_records(vec![
        Record::new(1994, "36:50", 2210, "A", "X"),
        Record::new(1995, "not a time", 2212, "Broken", "Z"),
        Record::new(1996, "36:55", 2215, "B", "Y"),
    ]);

    let frame = plot.build_scene().expect("scene");
    let indices: Vec<usize> = frame.markers.iter().map(|marker| marker.index).collect();
    assert_eq!(indices, vec![0, 2]);
}

#[test]
fn too_many_year_ticks_fail_only_in_strict_mode() {
    let records = vec![
        Record::new(1991, "37:00", 2220, "Early", "FRA"),
        Record::new(2015, "39:00", 2340, "Late", "GBR"),
    ];

    let strict = ScatterPlotConfig::default().with_strict_tick_labels(true);
    let mut plot = ScatterPlot::new(NullRenderer::default(), strict).expect("plot init");
    plot.set_records(records.clone());
    assert!(plot.build_scene().is_err());

    let lenient = ScatterPlotConfig::default().with_strict_tick_labels(false);
    let mut plot = ScatterPlot::new(NullRenderer::default(), lenient).expect("plot init");
    plot.set_records(records);
    let frame = plot.build_scene().expect("lenient scene");
    let x_axis = frame.axis("x-axis").expect("x axis");
    assert_eq!(x_axis.ticks.len(), 14);
    assert_eq!(x_axis.ticks[13].label, "");
}
