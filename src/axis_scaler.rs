//! Axis bounds and tick spacing for charts over bounded series such as daily
//! temperatures or precipitation chances.

/// How much room to leave around a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Padding {
    /// `floor(0.1 * min)`, used for temperature charts.
    Temperature,
    /// `floor(percent / 100 * (max - min)) + constant`.
    Proportional { percent: f64, constant: i64 },
}

/// Result of [`AxisScaler::scale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisScale {
    /// `min - |pad|`
    pub lower: i64,
    /// `max + |pad|`
    pub upper: i64,
    pub pad: i64,
    /// Tick spacing, `ceil((max - min) / steps)`.
    pub interval: i64,
}

/// Computes padded axis bounds and tick intervals for a target number of steps.
///
/// # Examples
///
/// ```
/// use nws_forecast::{AxisScaler, Padding};
///
/// let scale = AxisScaler::new(10, Padding::Temperature).scale(10.0, 50.0);
/// assert_eq!(scale.interval, 4);
/// assert_eq!(scale.pad, 1);
/// assert_eq!((scale.lower, scale.upper), (9, 51));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScaler {
    steps: u32,
    padding: Padding,
}

impl AxisScaler {
    /// `steps` of 0 is treated as 1.
    pub fn new(steps: u32, padding: Padding) -> Self {
        Self {
            steps: steps.max(1),
            padding,
        }
    }

    /// Scales the range `min..=max`. Callers must pass `max >= min`.
    pub fn scale(&self, min: f64, max: f64) -> AxisScale {
        debug_assert!(max >= min, "axis range is inverted: {min} > {max}");
        let pad = self.pad(min, max);
        AxisScale {
            lower: min.floor() as i64 - pad.abs(),
            upper: max.ceil() as i64 + pad.abs(),
            pad,
            interval: self.interval(min, max),
        }
    }

    /// Scales the range spanned by `values`, or `None` if there are none.
    pub fn scale_series(&self, values: impl IntoIterator<Item = f64>) -> Option<AxisScale> {
        let (min, max) = values
            .into_iter()
            .fold(None, |range: Option<(f64, f64)>, value| match range {
                None => Some((value, value)),
                Some((min, max)) => Some((min.min(value), max.max(value))),
            })?;
        Some(self.scale(min, max))
    }

    pub fn pad(&self, min: f64, max: f64) -> i64 {
        match self.padding {
            Padding::Temperature => (0.1 * min).floor() as i64,
            Padding::Proportional { percent, constant } => {
                (percent / 100.0 * (max - min)).floor() as i64 + constant
            }
        }
    }

    pub fn interval(&self, min: f64, max: f64) -> i64 {
        ((max - min) / f64::from(self.steps)).ceil() as i64
    }
}
