//! Scripted transport and payload builders for unit tests.

use crate::api::error::TransportError;
use crate::api::transport::{RawResponse, Transport};
use reqwest::StatusCode;
use std::future::Future;
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub(crate) enum MockReply {
    Json(u16, serde_json::Value),
    Text(u16, String),
    Redirect(String),
    Fail(String),
}

/// Replies to each URL with the first route whose pattern it contains.
/// Unmatched URLs get a 404.
#[derive(Debug, Default)]
pub(crate) struct MockTransport {
    routes: Vec<(String, MockReply)>,
    requests: Mutex<Vec<String>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn route(mut self, pattern: &str, reply: MockReply) -> Self {
        self.routes.push((pattern.to_string(), reply));
        self
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn reply(&self, url: &str) -> Result<RawResponse, TransportError> {
        let reply = self
            .routes
            .iter()
            .find(|(pattern, _)| url.contains(pattern.as_str()))
            .map(|(_, reply)| reply.clone())
            .unwrap_or_else(|| MockReply::Text(404, "not found".to_string()));

        let response = |code: u16, location: Option<String>, body: Vec<u8>| RawResponse {
            status: StatusCode::from_u16(code).unwrap(),
            location,
            body,
        };

        match reply {
            MockReply::Json(code, value) => Ok(response(code, None, value.to_string().into_bytes())),
            MockReply::Text(code, text) => Ok(response(code, None, text.into_bytes())),
            MockReply::Redirect(location) => Ok(response(301, Some(location), Vec::new())),
            MockReply::Fail(message) => Err(TransportError::Other(message)),
        }
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &str) -> impl Future<Output = Result<RawResponse, TransportError>> + Send {
        self.requests.lock().unwrap().push(url.to_string());
        std::future::ready(self.reply(url))
    }
}

pub(crate) mod fixtures {
    use chrono::{DateTime, Duration};
    use serde_json::{json, Value};

    pub(crate) fn points(region: &str, x: i64, y: i64) -> Value {
        json!({
            "@context": [],
            "id": "https://api.weather.gov/points/39.0473,-95.6752",
            "properties": {
                "cwa": region,
                "gridId": region,
                "gridX": x,
                "gridY": y,
                "forecastHourly": "https://api.weather.gov/gridpoints/TOP/31,80/forecast/hourly",
                "relativeLocation": {
                    "type": "Feature",
                    "properties": { "city": "Topeka", "state": "KS" }
                }
            }
        })
    }

    pub(crate) fn period(start: &str, temperature: i64, short: &str, is_daytime: bool) -> Value {
        let start_time = DateTime::parse_from_rfc3339(start).unwrap();
        let end_time = start_time + Duration::hours(1);
        json!({
            "number": 1,
            "startTime": start_time.to_rfc3339(),
            "endTime": end_time.to_rfc3339(),
            "isDaytime": is_daytime,
            "temperature": temperature,
            "temperatureUnit": "F",
            "probabilityOfPrecipitation": { "unitCode": "wmoUnit:percent", "value": 20 },
            "dewpoint": { "unitCode": "wmoUnit:degC", "value": 12.2 },
            "relativeHumidity": { "unitCode": "wmoUnit:percent", "value": 55 },
            "windSpeed": "10 mph",
            "windDirection": "S",
            "shortForecast": short,
            "detailedForecast": ""
        })
    }

    pub(crate) fn hourly(periods: &[Value]) -> Value {
        json!({ "properties": { "units": "us", "periods": periods } })
    }

    pub(crate) fn stations(stations: &[(&str, f64, f64)]) -> Value {
        let features: Vec<Value> = stations
            .iter()
            .map(|(id, lat, lon)| {
                json!({
                    "type": "Feature",
                    "geometry": { "type": "Point", "coordinates": [lon, lat] },
                    "properties": { "stationIdentifier": id, "name": format!("{id} Airport") }
                })
            })
            .collect();
        json!({ "type": "FeatureCollection", "features": features })
    }

    pub(crate) fn observation() -> Value {
        let quantity = |unit: &str, value: Option<f64>| json!({ "unitCode": unit, "value": value });
        json!({
            "properties": {
                "timestamp": "2024-07-01T11:52:00+00:00",
                "textDescription": "Clear",
                "temperature": quantity("wmoUnit:degC", Some(22.8)),
                "windDirection": quantity("wmoUnit:degree_(angle)", Some(180.0)),
                "windSpeed": quantity("wmoUnit:km_h-1", Some(18.36)),
                "windGust": quantity("wmoUnit:km_h-1", None),
                "barometricPressure": quantity("wmoUnit:Pa", Some(101_320.0)),
                "seaLevelPressure": quantity("wmoUnit:Pa", Some(101_250.0)),
                "visibility": quantity("wmoUnit:m", Some(16_090.0)),
                "windChill": quantity("wmoUnit:degC", None),
                "heatIndex": quantity("wmoUnit:degC", None)
            }
        })
    }
}
