use smallvec::SmallVec;

use crate::error::{DashboardError, DashboardResult};

/// Tick positions produced by [`LinearScale::ticks`].
pub type Ticks = SmallVec<[f64; 12]>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> DashboardResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(DashboardError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Builds a scale covering every finite value, widened by `pad_ratio` of
    /// the span on both sides.
    ///
    /// Empty input falls back to `fallback`; a single distinct value is
    /// widened by one unit on each side so the domain never collapses.
    pub fn from_extent(
        values: impl IntoIterator<Item = f64>,
        pad_ratio: f64,
        fallback: (f64, f64),
    ) -> DashboardResult<Self> {
        let mut extent: Option<(f64, f64)> = None;
        for value in values.into_iter().filter(|value| value.is_finite()) {
            extent = Some(match extent {
                Some((min, max)) => (min.min(value), max.max(value)),
                None => (value, value),
            });
        }

        let Some((min, max)) = extent else {
            return Self::new(fallback.0, fallback.1);
        };
        if min == max {
            return Self::new(min - 1.0, max + 1.0);
        }

        let pad = (max - min) * pad_ratio.max(0.0);
        Self::new(min - pad, max + pad)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Returns a copy whose domain also covers `value`.
    #[must_use]
    pub fn including(self, value: f64) -> Self {
        if !value.is_finite() {
            return self;
        }
        Self {
            domain_start: self.domain_start.min(value),
            domain_end: self.domain_end.max(value),
        }
    }

    /// Maps a domain value onto the pixel range `[range_start, range_end]`.
    ///
    /// The range may be descending (e.g. a y axis growing upwards).
    pub fn to_range(self, value: f64, range_start: f64, range_end: f64) -> DashboardResult<f64> {
        if !value.is_finite() {
            return Err(DashboardError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(range_start + normalized * (range_end - range_start))
    }

    pub fn from_range(self, pixel: f64, range_start: f64, range_end: f64) -> DashboardResult<f64> {
        if !pixel.is_finite() {
            return Err(DashboardError::InvalidData("pixel must be finite".to_owned()));
        }
        if range_start == range_end {
            return Err(DashboardError::InvalidData(
                "pixel range must be non-empty".to_owned(),
            ));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (pixel - range_start) / (range_end - range_start);
        Ok(self.domain_start + normalized * span)
    }

    /// Round-number ticks (1/2/5 x 10^k steps) inside the domain.
    #[must_use]
    pub fn ticks(self, target_count: usize) -> Ticks {
        let (low, high) = if self.domain_start <= self.domain_end {
            (self.domain_start, self.domain_end)
        } else {
            (self.domain_end, self.domain_start)
        };

        let mut ticks = Ticks::new();
        let target = target_count.max(2) as f64;
        let raw_step = (high - low) / (target - 1.0);
        if !raw_step.is_finite() || raw_step <= 0.0 {
            return ticks;
        }

        let magnitude = 10f64.powf(raw_step.log10().floor());
        let residual = raw_step / magnitude;
        let step = if residual <= 1.0 {
            magnitude
        } else if residual <= 2.0 {
            2.0 * magnitude
        } else if residual <= 5.0 {
            5.0 * magnitude
        } else {
            10.0 * magnitude
        };

        let first = (low / step).ceil() as i64;
        let last = (high / step).floor() as i64;
        for index in first..=last {
            let value = index as f64 * step;
            // -0.0 would otherwise print as "-0".
            ticks.push(if value == 0.0 { 0.0 } else { value });
        }
        ticks
    }
}
