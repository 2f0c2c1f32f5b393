use doping_scatter::api::{DOPING_ALLEGATION_COLOR, NO_ALLEGATION_COLOR};
use doping_scatter::core::Record;
use doping_scatter::interaction::{PointerEvent, Tooltip, TooltipState};
use doping_scatter::render::NullRenderer;
use doping_scatter::{PlotError, ScatterPlot, ScatterPlotConfig};

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
fn tooltip_starts_hidden_with_initial_year() {
    let plot = two_record_plot();
    let tooltip = plot.tooltip();
    assert_eq!(tooltip.state(), &TooltipState::Hidden);
    assert_eq!(tooltip.data_year(), Tooltip::INITIAL_DATA_YEAR);
    assert_eq!(tooltip.html(), None);
    assert_eq!(tooltip.background(), None);
}

#[test]
fn hovering_a_doping_record_shows_its_allegation() {
    let mut plot = two_record_plot();
    plot.pointer_enter(1, PointerEvent::new(500.0, 400.0))
        .expect("enter marker");

    let tooltip = plot.tooltip();
    assert!(tooltip.is_visible());
    assert_eq!(
        tooltip.html().as_deref(),
        Some("B: Y<br/>Year: 1996; Time: 36:55<br/>Alleged doping")
    );
    assert_eq!(tooltip.data_year(), 1996);
    assert_eq!(tooltip.position(), (510.0, 370.0));
    assert_eq!(tooltip.background(), Some(DOPING_ALLEGATION_COLOR));
    assert_eq!(plot.hovered_index(), Some(1));
}

#[test]
fn clean_record_tooltip_has_no_trailing_break() {
    let mut plot = two_record_plot();
    plot.pointer_enter(0, PointerEvent::new(0.0, 0.0).with_scroll(20.0, 300.0))
        .expect("enter marker");

    let tooltip = plot.tooltip();
    assert_eq!(
        tooltip.html().as_deref(),
        Some("A: X<br/>Year: 1994; Time: 36:50")
    );
    assert_eq!(tooltip.position(), (30.0, 270.0));
    assert_eq!(tooltip.background(), Some(NO_ALLEGATION_COLOR));
}

#[test]
fn leaving_hides_but_keeps_last_year() {
    let mut plot = two_record_plot();
    plot.pointer_enter(1, PointerEvent::new(500.0, 400.0))
        .expect("enter marker");
    plot.pointer_leave();

    assert!(!plot.tooltip().is_visible());
    assert_eq!(plot.tooltip().data_year(), 1996);
    assert_eq!(plot.hovered_index(), None);
    assert!(plot.needs_render());
}

#[test]
fn entering_an_unknown_marker_is_an_error() {
    let mut plot = two_record_plot();
    let err = plot
        .pointer_enter(7, PointerEvent::new(0.0, 0.0))
        .expect_err("index out of range");
    assert!(matches!(err, PlotError::InvalidData(_)));
    assert!(!plot.tooltip().is_visible());
}

#[test]
fn hit_test_finds_marker_under_point() {
    let plot = two_record_plot();

    assert_eq!(plot.hit_test(275.0, 100.0).expect("hit test"), Some(0));
    assert_eq!(plot.hit_test(669.0, 603.0).expect("hit test"), Some(1));
    assert_eq!(plot.hit_test(470.0, 350.0).expect("hit test"), None);
    assert!(plot.hit_test(f64::NAN, 0.0).is_err());
}

#[test]
fn hit_test_prefers_closest_then_last_drawn() {
    let mut plot =
        ScatterPlot::new(NullRenderer::default(), ScatterPlotConfig::default()).expect("plot init");
    plot.set_records(vec![
        Record::new(2000, "37:00", 2220, "First", "FRA"),
        Record::new(2000, "37:00", 2220, "Second", "ITA"),
        Record::new(2010, "39:00", 2340, "Other", "ESP"),
    ]);

    let frame = plot.build_scene().expect("scene");
    let shared = frame.marker(0).expect("marker");
    assert_eq!(plot.hit_test(shared.cx, shared.cy).expect("hit test"), Some(1));
}

#[test]
fn pointer_move_drives_enter_and_leave() {
    let mut plot = two_record_plot();
    let event = PointerEvent::new(280.0, 110.0);

    plot.pointer_move(276.0, 101.0, event).expect("move onto marker");
    assert_eq!(plot.hovered_index(), Some(0));
    assert_eq!(plot.tooltip().data_year(), 1994);

    plot.pointer_move(277.0, 102.0, event).expect("move within marker");
    assert_eq!(plot.hovered_index(), Some(0));

    plot.pointer_move(470.0, 350.0, event).expect("move off marker");
    assert_eq!(plot.hovered_index(), None);
    assert!(!plot.tooltip().is_visible());
}

#[test]
fn replacing_records_clears_hover() {
    let mut plot = two_record_plot();
    plot.pointer_enter(0, PointerEvent::new(0.0, 0.0))
        .expect("enter marker");
    plot.set_records(Vec::new());
    assert_eq!(plot.hovered_index(), None);
    assert!(!plot.tooltip().is_visible());
}

#[test]
fn tooltip_does_not_outlive_replaced_records() {
    let mut plot = two_record_plot();
    let event = PointerEvent::new(300.0, 120.0);
    plot.pointer_move(275.0, 100.0, event).expect("move onto marker");
    assert!(plot.tooltip().is_visible());

    plot.set_records(vec![Record::new(2005, "38:00", 2280, "C", "Z")]);
    assert!(!plot.tooltip().is_visible());

    plot.pointer_move(10.0, 10.0, event).expect("move off every marker");
    assert!(!plot.tooltip().is_visible());
    assert_eq!(plot.hovered_index(), None);
}

#[test]
fn entering_a_record_without_marker_is_an_error() {
    let mut plot =
        ScatterPlot::new(NullRenderer::default(), ScatterPlotConfig::default()).expect("plot init");
    plot.set_records(vec![
        Record::new(1994, "36:50", 2210, "A", "X"),
        Record::new(1995, "not a time", 2212, "Broken", "Z"),
    ]);

    let err = plot
        .pointer_enter(1, PointerEvent::new(0.0, 0.0))
        .expect_err("record has no marker");
    assert!(matches!(err, PlotError::InvalidData(_)));
    assert!(!plot.tooltip().is_visible());
    assert_eq!(plot.hovered_index(), None);
}
