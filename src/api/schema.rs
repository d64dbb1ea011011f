//! Deserialization targets for each endpoint, one set per payload version.
//!
//! Only the fields the crate consumes are declared; anything else the upstream
//! sends is ignored. Each target maps into the crate's own model types through
//! an explicit conversion, so a payload change stays contained here.

use crate::types::grid_point::GridPoint;
use crate::types::hourly_period::HourlyPeriod;
use crate::types::observation::{MeasuredValue, Observation};
use crate::types::station::Station;
use crate::types::unit::TemperatureUnit;
use chrono::{DateTime, FixedOffset};
use log::warn;
use serde::de::Error as _;
use serde::Deserialize;

/// A GeoJSON feature; only the `properties` member is read.
#[derive(Debug, Deserialize)]
struct Feature<P> {
    properties: P,
}

/// Quantitative value object, `{ "value": 12.3, "unitCode": "wmoUnit:degC" }`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuantityV1 {
    value: Option<f64>,
    #[serde(default)]
    unit_code: String,
}

impl From<QuantityV1> for MeasuredValue {
    fn from(quantity: QuantityV1) -> Self {
        MeasuredValue::new(quantity.value, quantity.unit_code)
    }
}

fn measured(quantity: Option<QuantityV1>) -> MeasuredValue {
    quantity.map(MeasuredValue::from).unwrap_or_default()
}

fn percent(quantity: Option<QuantityV1>) -> Option<u8> {
    quantity
        .and_then(|q| q.value)
        .map(|value| value.round().clamp(0.0, 100.0) as u8)
}

// --- /points/{lat},{lon} ---

#[derive(Debug, Deserialize)]
pub(crate) struct PointsV1 {
    properties: PointsPropertiesV1,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PointsPropertiesV1 {
    cwa: String,
    grid_x: u32,
    grid_y: u32,
    relative_location: Feature<RelativeLocationV1>,
}

#[derive(Debug, Deserialize)]
struct RelativeLocationV1 {
    city: String,
    state: String,
}

impl PointsV1 {
    pub(crate) fn into_grid_point(self) -> GridPoint {
        let place = self.properties.relative_location.properties;
        GridPoint {
            region: self.properties.cwa,
            grid_x: self.properties.grid_x,
            grid_y: self.properties.grid_y,
            display_name: format!("{}, {}", place.city, place.state),
        }
    }
}

// --- /gridpoints/{region}/{x},{y}/forecast/hourly ---

#[derive(Debug, Deserialize)]
pub(crate) struct HourlyForecastV1 {
    properties: HourlyForecastPropertiesV1,
}

#[derive(Debug, Deserialize)]
struct HourlyForecastPropertiesV1 {
    periods: Vec<PeriodV1>,
}

/// The hourly temperature is either a bare number with a sibling
/// `temperatureUnit`, or a quantitative value object carrying its own unit.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TemperatureV1 {
    Plain(f64),
    Quantity(QuantityV1),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PeriodV1 {
    start_time: DateTime<FixedOffset>,
    end_time: DateTime<FixedOffset>,
    is_daytime: bool,
    temperature: TemperatureV1,
    #[serde(default)]
    temperature_unit: Option<TemperatureUnit>,
    #[serde(default)]
    probability_of_precipitation: Option<QuantityV1>,
    #[serde(default)]
    dewpoint: Option<QuantityV1>,
    relative_humidity: QuantityV1,
    wind_speed: String,
    wind_direction: String,
    short_forecast: String,
    #[serde(default)]
    detailed_forecast: String,
}

impl PeriodV1 {
    fn into_period(self) -> Result<HourlyPeriod, serde_json::Error> {
        let (temperature, temperature_unit) = match self.temperature {
            TemperatureV1::Plain(value) => (value, self.temperature_unit.unwrap_or_default()),
            TemperatureV1::Quantity(quantity) => {
                let unit = TemperatureUnit::from_unit_code(&quantity.unit_code)
                    .or(self.temperature_unit)
                    .unwrap_or_default();
                let value = quantity.value.ok_or_else(|| {
                    serde_json::Error::custom(format!(
                        "period starting {} has no temperature value",
                        self.start_time
                    ))
                })?;
                (value, unit)
            }
        };
        let relative_humidity = percent(Some(self.relative_humidity)).ok_or_else(|| {
            serde_json::Error::custom(format!(
                "period starting {} has no relative humidity value",
                self.start_time
            ))
        })?;

        Ok(HourlyPeriod {
            start_time: self.start_time,
            end_time: self.end_time,
            temperature: temperature.round() as i32,
            temperature_unit,
            is_daytime: self.is_daytime,
            short_forecast: self.short_forecast,
            detailed_forecast: self.detailed_forecast,
            wind_speed_text: self.wind_speed,
            wind_direction_text: self.wind_direction,
            precip_probability: percent(self.probability_of_precipitation),
            relative_humidity,
            dew_point: self.dewpoint.and_then(|q| q.value),
        })
    }
}

impl HourlyForecastV1 {
    pub(crate) fn into_periods(self) -> Result<Vec<HourlyPeriod>, serde_json::Error> {
        self.properties
            .periods
            .into_iter()
            .map(PeriodV1::into_period)
            .collect()
    }
}

// --- /gridpoints/{region}/{x},{y}/stations ---

#[derive(Debug, Deserialize)]
pub(crate) struct StationsV1 {
    #[serde(default)]
    features: Vec<StationFeatureV1>,
}

#[derive(Debug, Deserialize)]
struct StationFeatureV1 {
    geometry: PointGeometryV1,
    properties: StationPropertiesV1,
}

#[derive(Debug, Deserialize)]
struct PointGeometryV1 {
    // GeoJSON position: [longitude, latitude, optional elevation...]
    coordinates: Vec<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StationPropertiesV1 {
    station_identifier: String,
}

impl StationsV1 {
    pub(crate) fn into_stations(self) -> Vec<Station> {
        self.features
            .into_iter()
            .filter_map(|feature| match feature.geometry.coordinates.as_slice() {
                [lon, lat, ..] => Some(Station {
                    id: feature.properties.station_identifier,
                    lat: *lat,
                    lon: *lon,
                }),
                _ => {
                    warn!(
                        "Skipping station {} with incomplete position",
                        feature.properties.station_identifier
                    );
                    None
                }
            })
            .collect()
    }
}

// --- /stations/{id}/observations/latest ---

#[derive(Debug, Deserialize)]
pub(crate) struct ObservationV1 {
    properties: ObservationPropertiesV1,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ObservationPropertiesV1 {
    wind_gust: QuantityV1,
    barometric_pressure: QuantityV1,
    sea_level_pressure: QuantityV1,
    visibility: QuantityV1,
    wind_chill: QuantityV1,
    heat_index: QuantityV1,
    wind_speed: QuantityV1,
    wind_direction: QuantityV1,
    #[serde(default)]
    timestamp: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    text_description: Option<String>,
    #[serde(default)]
    temperature: Option<QuantityV1>,
    #[serde(default)]
    dewpoint: Option<QuantityV1>,
    #[serde(default)]
    relative_humidity: Option<QuantityV1>,
}

impl ObservationV1 {
    pub(crate) fn into_observation(self) -> Observation {
        let p = self.properties;
        Observation {
            wind_gust: p.wind_gust.into(),
            barometric_pressure: p.barometric_pressure.into(),
            sea_level_pressure: p.sea_level_pressure.into(),
            visibility: p.visibility.into(),
            wind_chill: p.wind_chill.into(),
            heat_index: p.heat_index.into(),
            wind_speed: p.wind_speed.into(),
            wind_direction: p.wind_direction.into(),
            timestamp: p.timestamp,
            text_description: p.text_description.filter(|text| !text.is_empty()),
            temperature: measured(p.temperature),
            dewpoint: measured(p.dewpoint),
            relative_humidity: measured(p.relative_humidity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::fixtures;
    use serde_json::json;

    #[test]
    fn test_points_maps_to_grid_point() -> Result<(), serde_json::Error> {
        let points: PointsV1 = serde_json::from_value(fixtures::points("TOP", 31, 80))?;
        let grid = points.into_grid_point();
        assert_eq!(grid.region, "TOP");
        assert_eq!((grid.grid_x, grid.grid_y), (31, 80));
        assert_eq!(grid.display_name, "Topeka, KS");
        Ok(())
    }

    #[test]
    fn test_points_missing_grid_is_an_error() {
        let body = json!({ "properties": { "cwa": "TOP", "gridY": 80 } });
        assert!(serde_json::from_value::<PointsV1>(body).is_err());
    }

    #[test]
    fn test_negative_grid_index_is_rejected() {
        let mut body = fixtures::points("TOP", 31, 80);
        body["properties"]["gridX"] = json!(-1);
        assert!(serde_json::from_value::<PointsV1>(body).is_err());
    }

    #[test]
    fn test_hourly_plain_temperature() -> Result<(), serde_json::Error> {
        let body = fixtures::hourly(&[fixtures::period(
            "2024-07-01T06:00:00-05:00",
            68,
            "Sunny",
            true,
        )]);
        let forecast: HourlyForecastV1 = serde_json::from_value(body)?;
        let periods = forecast.into_periods()?;

        assert_eq!(periods.len(), 1);
        let period = &periods[0];
        assert_eq!(period.temperature, 68);
        assert_eq!(period.temperature_unit, TemperatureUnit::Fahrenheit);
        assert_eq!(period.wind_speed_text, "10 mph");
        assert_eq!(period.precip_probability, Some(20));
        assert_eq!(period.relative_humidity, 55);
        assert_eq!(period.dew_point, Some(12.2));
        assert_eq!(period.local_date().to_string(), "2024-07-01");
        Ok(())
    }

    #[test]
    fn test_hourly_quantity_temperature_and_null_precip() -> Result<(), serde_json::Error> {
        let mut period = fixtures::period("2024-07-01T06:00:00-05:00", 0, "Fog", false);
        period["temperature"] = json!({ "unitCode": "wmoUnit:degC", "value": 21.4 });
        period["probabilityOfPrecipitation"] = json!({ "unitCode": "wmoUnit:percent", "value": null });
        period["extraField"] = json!("ignored");

        let forecast: HourlyForecastV1 = serde_json::from_value(fixtures::hourly(&[period]))?;
        let periods = forecast.into_periods()?;
        assert_eq!(periods[0].temperature, 21);
        assert_eq!(periods[0].temperature_unit, TemperatureUnit::Celsius);
        assert_eq!(periods[0].precip_probability, None);
        Ok(())
    }

    #[test]
    fn test_hourly_quantity_without_value_fails() -> Result<(), serde_json::Error> {
        let mut period = fixtures::period("2024-07-01T06:00:00-05:00", 0, "Fog", false);
        period["temperature"] = json!({ "unitCode": "wmoUnit:degC", "value": null });
        let forecast: HourlyForecastV1 = serde_json::from_value(fixtures::hourly(&[period]))?;
        assert!(forecast.into_periods().is_err());
        Ok(())
    }

    #[test]
    fn test_hourly_missing_humidity_is_an_error() {
        let complete = fixtures::period("2024-07-01T06:00:00-05:00", 70, "Sunny", true);
        let mut incomplete = fixtures::period("2024-07-01T07:00:00-05:00", 72, "Sunny", true);
        if let Some(fields) = incomplete.as_object_mut() {
            fields.remove("relativeHumidity");
        }

        let body = fixtures::hourly(&[complete, incomplete]);
        assert!(serde_json::from_value::<HourlyForecastV1>(body).is_err());
    }

    #[test]
    fn test_hourly_null_humidity_is_an_error() -> Result<(), serde_json::Error> {
        let mut period = fixtures::period("2024-07-01T06:00:00-05:00", 70, "Sunny", true);
        period["relativeHumidity"] = json!({ "unitCode": "wmoUnit:percent", "value": null });

        let forecast: HourlyForecastV1 = serde_json::from_value(fixtures::hourly(&[period]))?;
        assert!(forecast.into_periods().is_err());
        Ok(())
    }

    #[test]
    fn test_stations_swap_geojson_coordinates() -> Result<(), serde_json::Error> {
        let body = fixtures::stations(&[("KTOP", 39.07, -95.62)]);
        let stations = serde_json::from_value::<StationsV1>(body)?.into_stations();
        assert_eq!(
            stations,
            vec![Station {
                id: "KTOP".to_string(),
                lat: 39.07,
                lon: -95.62
            }]
        );
        Ok(())
    }

    #[test]
    fn test_stations_accept_elevation_in_position() -> Result<(), serde_json::Error> {
        let body = json!({
            "features": [
                {
                    "geometry": { "type": "Point", "coordinates": [-95.62, 39.07, 270.0] },
                    "properties": { "stationIdentifier": "KTOP" }
                },
                {
                    "geometry": { "type": "Point", "coordinates": [-96.67] },
                    "properties": { "stationIdentifier": "BROKEN" }
                }
            ]
        });
        let stations = serde_json::from_value::<StationsV1>(body)?.into_stations();
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].id, "KTOP");
        assert_eq!((stations[0].lat, stations[0].lon), (39.07, -95.62));
        Ok(())
    }

    #[test]
    fn test_stations_without_features_is_empty() -> Result<(), serde_json::Error> {
        let stations = serde_json::from_value::<StationsV1>(json!({}))?.into_stations();
        assert!(stations.is_empty());
        Ok(())
    }

    #[test]
    fn test_observation_keeps_missing_values_missing() -> Result<(), serde_json::Error> {
        let observation =
            serde_json::from_value::<ObservationV1>(fixtures::observation())?.into_observation();
        assert_eq!(observation.wind_speed.value, Some(18.36));
        assert_eq!(observation.wind_speed.unit_code, "wmoUnit:km_h-1");
        assert_eq!(observation.wind_gust.value, None);
        assert!(!observation.heat_index.is_reported());
        assert_eq!(observation.text_description.as_deref(), Some("Clear"));
        // not present in the fixture at all
        assert!(!observation.relative_humidity.is_reported());
        Ok(())
    }

    #[test]
    fn test_observation_requires_core_fields() {
        let body = json!({ "properties": { "windSpeed": { "value": 1.0, "unitCode": "x" } } });
        assert!(serde_json::from_value::<ObservationV1>(body).is_err());
    }
}
