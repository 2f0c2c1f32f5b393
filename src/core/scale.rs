use crate::error::{PlotError, PlotResult};

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Continuous linear mapping from a data domain onto a pixel range.
///
/// A zero-span domain maps every value onto the middle of the range so a
/// single distinct sample still lands inside the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> PlotResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(PlotError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(PlotError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = if span == 0.0 {
            0.5
        } else {
            (value - self.domain_start) / span
        };
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Returns roughly `count` human-friendly tick values inside the domain.
    ///
    /// Steps are powers of ten multiplied by 1, 2 or 5. Ticks are returned in
    /// domain order, so a reversed domain yields descending values.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain_start, self.domain_end, count)
    }
}

/// Evenly spaced "nice" values covering `[start, stop]`.
#[must_use]
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let Some(spec) = tick_spec(lo, hi, count as f64) else {
        return Vec::new();
    };

    let mut ticks: Vec<f64> = (spec.first..=spec.last)
        .map(|index| spec.value_at(index))
        .collect();
    if reverse {
        ticks.reverse();
    }
    ticks
}

/// Step between ticks chosen by [`nice_ticks`] for the same inputs.
#[must_use]
pub fn nice_tick_step(start: f64, stop: f64, count: usize) -> Option<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() || start == stop {
        return None;
    }
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    tick_spec(lo, hi, count as f64).map(TickSpec::step)
}

#[derive(Debug, Clone, Copy)]
struct TickSpec {
    first: i64,
    last: i64,
    // Negative increments encode a fractional step of `1 / -increment`.
    increment: f64,
}

impl TickSpec {
    fn value_at(self, index: i64) -> f64 {
        if self.increment < 0.0 {
            index as f64 / -self.increment
        } else {
            index as f64 * self.increment
        }
    }

    fn step(self) -> f64 {
        if self.increment < 0.0 {
            1.0 / -self.increment
        } else {
            self.increment
        }
    }
}

fn tick_spec(start: f64, stop: f64, count: f64) -> Option<TickSpec> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step <= 0.0 {
        return None;
    }

    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (first, last, increment) = if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut first = (start * inc).round();
        let mut last = (stop * inc).round();
        if first / inc < start {
            first += 1.0;
        }
        if last / inc > stop {
            last -= 1.0;
        }
        (first, last, -inc)
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut first = (start / inc).round();
        let mut last = (stop / inc).round();
        if first * inc < start {
            first += 1.0;
        }
        if last * inc > stop {
            last -= 1.0;
        }
        (first, last, inc)
    };

    if last < first && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    if last < first {
        return None;
    }

    Some(TickSpec {
        first: first as i64,
        last: last as i64,
        increment,
    })
}
