use crate::core::{LinearScale, PlotArea, TimeOfDay};
use crate::error::PlotResult;

/// Fallback vertical extent (36:30 to 40:00) used when no time parses.
pub const FALLBACK_TIME_DOMAIN_SECONDS: (u32, u32) = (36 * 60 + 30, 40 * 60);

/// Vertical scale: race time onto the padded plot height.
///
/// The domain runs from the fastest to the slowest time and the range from
/// the top padding to the bottom padding, so faster times sit higher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeOfDayScale {
    linear: LinearScale,
    start: TimeOfDay,
    end: TimeOfDay,
    fallback: bool,
}

impl TimeOfDayScale {
    pub fn from_times(
        times: impl IntoIterator<Item = TimeOfDay>,
        area: PlotArea,
    ) -> PlotResult<Self> {
        let mut extent: Option<(TimeOfDay, TimeOfDay)> = None;
        for time in times {
            extent = Some(match extent {
                None => (time, time),
                Some((min, max)) => (min.min(time), max.max(time)),
            });
        }

        match extent {
            Some((start, end)) => Self::with_extent(start, end, area, false),
            None => Self::fallback(area),
        }
    }

    pub fn fallback(area: PlotArea) -> PlotResult<Self> {
        let start = TimeOfDay::from_seconds_of_day(FALLBACK_TIME_DOMAIN_SECONDS.0)?;
        let end = TimeOfDay::from_seconds_of_day(FALLBACK_TIME_DOMAIN_SECONDS.1)?;
        Self::with_extent(start, end, area, true)
    }

    fn with_extent(
        start: TimeOfDay,
        end: TimeOfDay,
        area: PlotArea,
        fallback: bool,
    ) -> PlotResult<Self> {
        let linear = LinearScale::new(
            (
                f64::from(start.seconds_of_day()),
                f64::from(end.seconds_of_day()),
            ),
            area.vertical_range(),
        )?;
        Ok(Self {
            linear,
            start,
            end,
            fallback,
        })
    }

    /// Fastest and slowest time in the domain.
    #[must_use]
    pub fn extent(self) -> (TimeOfDay, TimeOfDay) {
        (self.start, self.end)
    }

    #[must_use]
    pub fn domain_seconds(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    #[must_use]
    pub fn is_fallback(self) -> bool {
        self.fallback
    }

    #[must_use]
    pub fn time_to_pixel(self, time: TimeOfDay) -> f64 {
        self.linear.map(f64::from(time.seconds_of_day()))
    }

    #[must_use]
    pub fn pixel_to_seconds(self, pixel: f64) -> f64 {
        self.linear.invert(pixel)
    }
}
