//! Temperature units, used both to tag upstream forecast values and as the
//! caller-selected display unit for aggregation and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A temperature scale.
///
/// The upstream hourly forecast tags each period with `"F"` or `"C"`, which is
/// what the serde representation follows. The same type is passed explicitly
/// to [`DayAggregator`](crate::DayAggregator) and [`HourlyPeriod::temperature_in`](crate::HourlyPeriod::temperature_in)
/// to select the unit values are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    /// Degrees Fahrenheit, the upstream default.
    #[default]
    #[serde(rename = "F")]
    Fahrenheit,
    /// Degrees Celsius.
    #[serde(rename = "C")]
    Celsius,
}

impl TemperatureUnit {
    /// Converts `value`, expressed in `from`, into this unit.
    ///
    /// The converted value is rounded to the nearest degree (halves away from zero)
    /// before being narrowed back to an integer.
    ///
    /// ```
    /// use nws_forecast::TemperatureUnit;
    ///
    /// assert_eq!(TemperatureUnit::Celsius.convert(212, TemperatureUnit::Fahrenheit), 100);
    /// assert_eq!(TemperatureUnit::Fahrenheit.convert(-40, TemperatureUnit::Celsius), -40);
    /// assert_eq!(TemperatureUnit::Fahrenheit.convert(70, TemperatureUnit::Fahrenheit), 70);
    /// ```
    pub fn convert(self, value: i32, from: TemperatureUnit) -> i32 {
        match (from, self) {
            (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => {
                ((f64::from(value) - 32.0) * 5.0 / 9.0).round() as i32
            }
            (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => {
                (f64::from(value) * 9.0 / 5.0 + 32.0).round() as i32
            }
            _ => value,
        }
    }

    /// Maps a WMO unit code such as `wmoUnit:degC` to a unit, if it names a temperature scale.
    pub fn from_unit_code(code: &str) -> Option<Self> {
        match code.rsplit(':').next() {
            Some("degC") => Some(TemperatureUnit::Celsius),
            Some("degF") => Some(TemperatureUnit::Fahrenheit),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Celsius => "°C",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
