//! Latest station observation.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A reported measurement paired with its WMO unit code.
///
/// `value` is `None` when the station did not report the quantity; this is
/// kept distinct from a reported zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeasuredValue {
    pub value: Option<f64>,
    /// Unit code as sent upstream, e.g. `wmoUnit:km_h-1`.
    pub unit_code: String,
}

impl MeasuredValue {
    pub fn new(value: Option<f64>, unit_code: impl Into<String>) -> Self {
        Self {
            value,
            unit_code: unit_code.into(),
        }
    }

    pub fn is_reported(&self) -> bool {
        self.value.is_some()
    }

    /// The unit code without its `wmoUnit:` namespace, e.g. `km_h-1`.
    pub fn unit_suffix(&self) -> &str {
        self.unit_code
            .split_once(':')
            .map_or(self.unit_code.as_str(), |(_, unit)| unit)
    }
}

/// The most recent observation reported by a station.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Observation {
    pub wind_gust: MeasuredValue,
    pub barometric_pressure: MeasuredValue,
    pub sea_level_pressure: MeasuredValue,
    pub visibility: MeasuredValue,
    pub wind_chill: MeasuredValue,
    pub heat_index: MeasuredValue,
    pub wind_speed: MeasuredValue,
    pub wind_direction: MeasuredValue,
    // Fields below are optional in the payload; absent ones stay unreported.
    pub timestamp: Option<DateTime<FixedOffset>>,
    pub text_description: Option<String>,
    pub temperature: MeasuredValue,
    pub dewpoint: MeasuredValue,
    pub relative_humidity: MeasuredValue,
}
