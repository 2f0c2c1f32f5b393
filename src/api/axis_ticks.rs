use smallvec::SmallVec;
use tracing::warn;

use crate::core::{TimeOfDay, TimeOfDayScale, YearScale};
use crate::error::{PlotError, PlotResult};
use crate::render::AxisTick;

/// Tick count requested from the year scale.
pub const X_AXIS_TICK_COUNT_HINT: usize = 10;
pub const X_AXIS_LABEL_COUNT: usize = 13;
pub const X_AXIS_FIRST_LABEL_YEAR: i32 = 1994;
pub const X_AXIS_LABEL_STEP_YEARS: i32 = 2;

/// Year axis label text, assigned to ticks by position.
///
/// Labels are bound to the tick index, not to the tick value: when the
/// scale does not start its ticks at 1994 in steps of two years the text
/// and the tick position disagree. That mismatch is kept as-is.
pub const X_AXIS_LABELS: [i32; X_AXIS_LABEL_COUNT] = x_axis_labels();

pub const Y_AXIS_TICK_INTERVAL_SECONDS: u32 = 15;

pub type XAxisTicks = SmallVec<[AxisTick; 16]>;

const fn x_axis_labels() -> [i32; X_AXIS_LABEL_COUNT] {
    let mut labels = [0; X_AXIS_LABEL_COUNT];
    let mut index = 0;
    while index < X_AXIS_LABEL_COUNT {
        labels[index] = X_AXIS_FIRST_LABEL_YEAR + X_AXIS_LABEL_STEP_YEARS * index as i32;
        index += 1;
    }
    labels
}

#[must_use]
pub fn x_axis_label(tick_index: usize) -> Option<i32> {
    X_AXIS_LABELS.get(tick_index).copied()
}

/// Year axis ticks at the scale's own positions, labelled by index.
///
/// Ticks past the last fixed label are an error when `strict` is set and
/// stay unlabelled otherwise.
pub fn x_axis_ticks(scale: YearScale, strict: bool) -> PlotResult<XAxisTicks> {
    let values = scale.ticks(X_AXIS_TICK_COUNT_HINT);
    if values.len() > X_AXIS_LABEL_COUNT {
        if strict {
            return Err(PlotError::InvalidData(format!(
                "year axis produced {} ticks but only {} fixed labels exist",
                values.len(),
                X_AXIS_LABEL_COUNT
            )));
        }
        warn!(
            tick_count = values.len(),
            label_count = X_AXIS_LABEL_COUNT,
            "year axis has more ticks than fixed labels; extra ticks stay blank"
        );
    }

    Ok(values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let label = x_axis_label(index)
                .map(|year| year.to_string())
                .unwrap_or_default();
            AxisTick::new(scale.value_to_pixel(value), label)
        })
        .collect())
}

/// Every whole second of the scale extent whose second component is a
/// multiple of 15.
///
/// The scan walks one second at a time so alignment does not depend on where
/// the extent starts.
#[must_use]
pub fn y_axis_tick_times(scale: TimeOfDayScale) -> Vec<TimeOfDay> {
    let (start, end) = scale.extent();
    (start.seconds_of_day()..=end.seconds_of_day())
        .filter_map(|seconds| TimeOfDay::from_seconds_of_day(seconds).ok())
        .filter(|time| time.second() % Y_AXIS_TICK_INTERVAL_SECONDS == 0)
        .collect()
}

#[must_use]
pub fn y_axis_ticks(scale: TimeOfDayScale) -> Vec<AxisTick> {
    y_axis_tick_times(scale)
        .into_iter()
        .map(|time| AxisTick::new(scale.time_to_pixel(time), time.format_mm_ss()))
        .collect()
}
