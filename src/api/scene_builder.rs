use tracing::{debug, warn};

use crate::core::{TimeOfDay, TimeOfDayScale, YearScale};
use crate::error::PlotResult;
use crate::render::{
    AxisOrientation, AxisPrimitive, Color, MarkerBinding, MarkerPrimitive, RectPrimitive,
    Renderer, SceneFrame, TextHAlign, TextPrimitive,
};

use super::ScatterPlot;
use super::axis_ticks::{x_axis_ticks, y_axis_ticks};

pub const TITLE_TEXT: &str = "Doping in Professional Bicycle Racing";
pub const SUBTITLE_TEXT: &str = "35 Fastest times up Alpe d'Huez";
pub const Y_AXIS_TITLE_TEXT: &str = "Time in Minutes";
pub const DOPING_LEGEND_TEXT: &str = "Has doping allegation";
pub const CLEAN_LEGEND_TEXT: &str = "No doping allegation";

const TEXT_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);
const TITLE_FONT_SIZE_PX: f64 = 30.0;
const SUBTITLE_FONT_SIZE_PX: f64 = 20.0;
const Y_AXIS_TITLE_FONT_SIZE_PX: f64 = 18.0;
const LEGEND_FONT_SIZE_PX: f64 = 14.0;
const LEGEND_SWATCH_SIZE_PX: f64 = 20.0;
const AXIS_FONT_SIZE_PX: f64 = 10.0;
const AXIS_TICK_SIZE_PX: f64 = 6.0;
const X_AXIS_TICK_PADDING_PX: f64 = 20.0;
const Y_AXIS_TICK_PADDING_PX: f64 = 3.0;

/// Scales derived from the current record set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotScales {
    pub x: YearScale,
    pub y: TimeOfDayScale,
}

impl<R: Renderer> ScatterPlot<R> {
    /// Fits both scales to the loaded records.
    ///
    /// Records whose time does not parse are left out of the vertical fit.
    /// With no usable record each scale falls back to a fixed domain.
    pub fn scales(&self) -> PlotResult<PlotScales> {
        self.fit_scales(&self.usable_times())
    }

    /// One marker per record with a parseable time, in record order.
    pub fn project_markers(&self, scales: PlotScales) -> Vec<MarkerPrimitive> {
        self.markers_for(&self.usable_times(), scales)
    }

    /// Builds the complete scene for the current state.
    pub fn build_scene(&self) -> PlotResult<SceneFrame> {
        let usable = self.usable_times();
        let scales = self.fit_scales(&usable)?;
        let markers = self.markers_for(&usable, scales);
        let x_ticks = x_axis_ticks(scales.x, self.config.strict_tick_labels)?;
        let y_ticks = y_axis_ticks(scales.y);
        debug!(
            records = self.records.len(),
            markers = markers.len(),
            x_ticks = x_ticks.len(),
            y_ticks = y_ticks.len(),
            fallback_x = scales.x.is_fallback(),
            fallback_y = scales.y.is_fallback(),
            "build scene"
        );

        let mut frame = SceneFrame::new(self.config.viewport)
            .with_text(
                TextPrimitive::new(
                    TITLE_TEXT,
                    230.0,
                    40.0,
                    TITLE_FONT_SIZE_PX,
                    TEXT_COLOR,
                    TextHAlign::Left,
                )
                .with_id("title"),
            )
            .with_text(
                TextPrimitive::new(
                    SUBTITLE_TEXT,
                    355.0,
                    64.0,
                    SUBTITLE_FONT_SIZE_PX,
                    TEXT_COLOR,
                    TextHAlign::Left,
                )
                .with_id("sub-title"),
            );
        frame.markers = markers;

        for (y, color, label, label_x) in [
            (250.0, self.config.doping_color, DOPING_LEGEND_TEXT, 654.0),
            (280.0, self.config.clean_color, CLEAN_LEGEND_TEXT, 658.0),
        ] {
            frame = frame
                .with_rect(RectPrimitive::new(
                    800.0,
                    y,
                    LEGEND_SWATCH_SIZE_PX,
                    LEGEND_SWATCH_SIZE_PX,
                    color,
                ))
                .with_text(TextPrimitive::new(
                    label,
                    label_x,
                    y + 14.0,
                    LEGEND_FONT_SIZE_PX,
                    TEXT_COLOR,
                    TextHAlign::Left,
                ));
        }

        let frame = frame
            .with_axis(AxisPrimitive {
                id: "x-axis".to_owned(),
                orientation: AxisOrientation::Bottom,
                translate_x: 0.0,
                translate_y: self.area.bottom,
                range: scales.x.range(),
                ticks: x_ticks.into_vec(),
                tick_size_px: AXIS_TICK_SIZE_PX,
                tick_padding_px: X_AXIS_TICK_PADDING_PX,
                font_size_px: AXIS_FONT_SIZE_PX,
                color: TEXT_COLOR,
            })
            .with_axis(AxisPrimitive {
                id: "y-axis".to_owned(),
                orientation: AxisOrientation::Left,
                translate_x: self.area.left,
                translate_y: 0.0,
                range: scales.y.range(),
                ticks: y_ticks,
                tick_size_px: AXIS_TICK_SIZE_PX,
                tick_padding_px: Y_AXIS_TICK_PADDING_PX,
                font_size_px: AXIS_FONT_SIZE_PX,
                color: TEXT_COLOR,
            })
            .with_text(
                TextPrimitive::new(
                    Y_AXIS_TITLE_TEXT,
                    -250.0,
                    35.0,
                    Y_AXIS_TITLE_FONT_SIZE_PX,
                    TEXT_COLOR,
                    TextHAlign::Left,
                )
                .with_id("legend")
                .with_rotation(-90.0),
            );

        Ok(frame)
    }

    fn fit_scales(&self, usable: &[(usize, TimeOfDay)]) -> PlotResult<PlotScales> {
        let x = YearScale::from_records(&self.records, self.area)?;
        let y = TimeOfDayScale::from_times(usable.iter().map(|(_, time)| *time), self.area)?;
        Ok(PlotScales { x, y })
    }

    fn markers_for(&self, usable: &[(usize, TimeOfDay)], scales: PlotScales) -> Vec<MarkerPrimitive> {
        usable
            .iter()
            .map(|&(index, time)| {
                let record = &self.records[index];
                let iso_timestamp = record.iso_timestamp().unwrap_or_else(|err| {
                    warn!(index, error = %err, "marker exported without a timestamp");
                    String::new()
                });
                MarkerPrimitive {
                    index,
                    year: record.year,
                    iso_timestamp,
                    cx: scales.x.year_to_pixel(record.year),
                    cy: scales.y.time_to_pixel(time),
                    radius: self.config.marker_radius_px,
                    fill: self.config.marker_fill(record.has_doping_allegation()),
                    binding: MarkerBinding { index },
                }
            })
            .collect()
    }

    /// `(record index, parsed time)` for every record whose time parses.
    fn usable_times(&self) -> Vec<(usize, TimeOfDay)> {
        self.records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| match record.parsed_time() {
                Ok(time) => Some((index, time)),
                Err(err) => {
                    warn!(index, time = %record.time, error = %err, "skipping record with unparseable time");
                    None
                }
            })
            .collect()
    }
}
