use crate::core::{LinearScale, PlotArea, Record};
use crate::error::PlotResult;

/// Domain used when there is no record to fit against.
///
/// Nice ticks over this span land exactly on the thirteen fixed even-year
/// labels `1994..=2018`.
pub const FALLBACK_YEAR_DOMAIN: (f64, f64) = (1993.0, 2019.0);

/// Horizontal scale: year onto the padded plot width.
///
/// The fitted domain is `[min(year) - 1, max(year) + 1]` so markers never
/// sit on the plot edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearScale {
    linear: LinearScale,
    fallback: bool,
}

impl YearScale {
    pub fn from_records(records: &[Record], area: PlotArea) -> PlotResult<Self> {
        Self::from_years(records.iter().map(|record| record.year), area)
    }

    pub fn from_years(years: impl IntoIterator<Item = i32>, area: PlotArea) -> PlotResult<Self> {
        let extent = years
            .into_iter()
            .fold(None, |extent: Option<(i32, i32)>, year| match extent {
                None => Some((year, year)),
                Some((min, max)) => Some((min.min(year), max.max(year))),
            });

        match extent {
            Some((min, max)) => Ok(Self {
                linear: LinearScale::new(
                    (f64::from(min) - 1.0, f64::from(max) + 1.0),
                    area.horizontal_range(),
                )?,
                fallback: false,
            }),
            None => Self::fallback(area),
        }
    }

    pub fn fallback(area: PlotArea) -> PlotResult<Self> {
        Ok(Self {
            linear: LinearScale::new(FALLBACK_YEAR_DOMAIN, area.horizontal_range())?,
            fallback: true,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    /// `true` when the domain came from [`FALLBACK_YEAR_DOMAIN`].
    #[must_use]
    pub fn is_fallback(self) -> bool {
        self.fallback
    }

    #[must_use]
    pub fn year_to_pixel(self, year: i32) -> f64 {
        self.linear.map(f64::from(year))
    }

    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        self.linear.map(value)
    }

    #[must_use]
    pub fn pixel_to_year(self, pixel: f64) -> f64 {
        self.linear.invert(pixel)
    }

    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        self.linear.ticks(count)
    }
}
