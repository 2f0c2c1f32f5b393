mod axis_ticks;
mod data_controller;
mod interaction_controller;
mod plot;
mod plot_config;
mod scene_builder;

pub use axis_ticks::{
    X_AXIS_FIRST_LABEL_YEAR, X_AXIS_LABEL_COUNT, X_AXIS_LABEL_STEP_YEARS, X_AXIS_LABELS,
    X_AXIS_TICK_COUNT_HINT, XAxisTicks, Y_AXIS_TICK_INTERVAL_SECONDS, x_axis_label, x_axis_ticks,
    y_axis_tick_times, y_axis_ticks,
};
pub use plot::ScatterPlot;
pub use plot_config::{
    DEFAULT_HORIZONTAL_PADDING_PX, DEFAULT_MARKER_RADIUS_PX, DEFAULT_VERTICAL_PADDING_PX,
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, DOPING_ALLEGATION_COLOR, NO_ALLEGATION_COLOR,
    ScatterPlotConfig,
};
pub use scene_builder::{
    CLEAN_LEGEND_TEXT, DOPING_LEGEND_TEXT, PlotScales, SUBTITLE_TEXT, TITLE_TEXT,
    Y_AXIS_TITLE_TEXT,
};
