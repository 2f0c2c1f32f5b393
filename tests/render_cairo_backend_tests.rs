#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use doping_scatter::core::Record;
use doping_scatter::render::CairoRenderer;
use doping_scatter::{PlotError, ScatterPlot, ScatterPlotConfig};

fn sample_records() -> Vec<Record> {
    vec![
        Record::new(1994, "36:50", 2210, "A", "X"),
        Record::new(1996, "36:55", 2215, "B", "Y").with_doping("Alleged doping"),
    ]
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 700).expect_err("invalid width must fail");
    assert!(matches!(err, PlotError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_markers_legend_and_axes() {
    let renderer = CairoRenderer::new(940, 700).expect("renderer");
    let mut plot = ScatterPlot::new(renderer, ScatterPlotConfig::default()).expect("plot init");
    plot.set_records(sample_records());

    plot.render().expect("render");
    let stats = plot.into_renderer().last_stats();

    assert_eq!(stats.markers_drawn, 2);
    assert_eq!(stats.rects_drawn, 2);
    // Five scene texts plus nine year labels; the y extent holds no quarter minute.
    assert_eq!(stats.texts_drawn, 14);
    assert!(stats.lines_drawn >= 11);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(940, 700).expect("renderer");
    let mut plot = ScatterPlot::new(renderer, ScatterPlotConfig::default()).expect("plot init");
    plot.set_records(sample_records());

    let surface = ImageSurface::create(Format::ARgb32, 940, 700).expect("surface");
    let context = Context::new(&surface).expect("context");
    plot.render_on_cairo_context(&context)
        .expect("render on context");

    assert_eq!(plot.renderer().last_stats().markers_drawn, 2);
    assert!(!plot.needs_render());
}
