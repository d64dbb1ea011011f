//! The hour-granularity forecast record produced by the hourly forecast endpoint.

use crate::types::unit::TemperatureUnit;
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// One hourly forecast period.
///
/// Periods are produced in ascending `start_time` order and never mutated after
/// mapping. Timestamps keep the offset the upstream reported them in, which is
/// the local time of the forecast office; [`HourlyPeriod::local_date`] relies on
/// that to bucket periods into calendar days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPeriod {
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    /// Temperature in `temperature_unit`.
    pub temperature: i32,
    pub temperature_unit: TemperatureUnit,
    pub is_daytime: bool,
    /// Short condition label such as "Mostly Sunny". Used for icon selection.
    pub short_forecast: String,
    pub detailed_forecast: String,
    /// Free-form wind speed text, e.g. "10 mph" or "5 to 10 mph".
    pub wind_speed_text: String,
    /// Compass direction text, e.g. "NW".
    pub wind_direction_text: String,
    /// Chance of precipitation in percent, if the upstream reported one.
    pub precip_probability: Option<u8>,
    /// Relative humidity in percent.
    pub relative_humidity: u8,
    /// Dew point in degrees Celsius, if reported.
    pub dew_point: Option<f64>,
}

impl HourlyPeriod {
    /// The calendar day of `start_time` in the offset it was reported in.
    pub fn local_date(&self) -> NaiveDate {
        self.start_time.date_naive()
    }

    /// The temperature expressed in `unit`.
    pub fn temperature_in(&self, unit: TemperatureUnit) -> i32 {
        unit.convert(self.temperature, self.temperature_unit)
    }

    /// The leading integer of the wind speed text, or 0 if the text does not start with digits.
    ///
    /// "5 to 10 mph" yields 5; "Calm" yields 0.
    pub fn wind_speed_mph(&self) -> u32 {
        leading_integer(&self.wind_speed_text)
    }
}

pub(crate) fn leading_integer(text: &str) -> u32 {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("10 mph"), 10);
        assert_eq!(leading_integer("5 to 10 mph"), 5);
        assert_eq!(leading_integer("  15 mph"), 15);
        assert_eq!(leading_integer("Calm"), 0);
        assert_eq!(leading_integer(""), 0);
        assert_eq!(leading_integer("mph 10"), 0);
    }
}
