use crate::types::icon_asset::IconAsset;
use crate::types::unit::TemperatureUnit;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregated statistics for all hourly periods sharing one local calendar day.
///
/// Always rebuilt from the full set of contributing periods; see
/// [`DayAggregator::group_by_day`](crate::DayAggregator::group_by_day).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    /// Unit of `min_temp` and `max_temp`.
    pub unit: TemperatureUnit,
    pub min_temp: i32,
    pub max_temp: i32,
    pub avg_humidity: u8,
    pub avg_wind_speed_mph: u32,
    pub max_precip_probability: u8,
    /// The most frequent short forecast label of the day.
    pub dominant_condition: String,
    pub dominant_is_daytime: bool,
    pub icon: IconAsset,
}
