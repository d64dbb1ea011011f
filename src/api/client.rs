//! Client for the four read-only weather.gov endpoints the pipeline consumes.
//!
//! All calls share one failure taxonomy: transport failures become
//! [`WeatherApiError::Connection`], a final status outside 2xx becomes
//! [`WeatherApiError::Api`], and a body that does not match the expected
//! payload becomes [`WeatherApiError::Parse`]. Only grid resolution follows
//! `301 Moved Permanently`, which the upstream sends when coordinates carry
//! more precision than it accepts.

use crate::api::config::ClientConfig;
use crate::api::error::WeatherApiError;
use crate::api::schema::{HourlyForecastV1, ObservationV1, PointsV1, StationsV1};
use crate::api::transport::{RawResponse, ReqwestTransport, Transport};
use crate::types::grid_point::GridPoint;
use crate::types::hourly_period::HourlyPeriod;
use crate::types::observation::Observation;
use crate::types::station::Station;
use log::{debug, info, warn};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;

/// Stateless handle over an injected [`Transport`].
///
/// # Examples
///
/// ```no_run
/// # use nws_forecast::{WeatherClient, WeatherApiError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), WeatherApiError> {
/// let client = WeatherClient::new()?;
/// let grid = client.resolve_grid_point(39.0473, -95.6752).await?;
/// let periods = client
///     .fetch_hourly_forecast(&grid.region, grid.grid_x, grid.grid_y)
///     .await?;
/// println!("{} hourly periods for {}", periods.len(), grid.display_name);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WeatherClient<T = ReqwestTransport> {
    transport: T,
    base_url: String,
    max_redirects: usize,
}

impl WeatherClient<ReqwestTransport> {
    /// Creates a client for `https://api.weather.gov` with default settings.
    pub fn new() -> Result<Self, WeatherApiError> {
        Self::from_config(ClientConfig::default())
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, WeatherApiError> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(transport, &config))
    }
}

impl<T: Transport> WeatherClient<T> {
    /// Wraps an existing transport. Only `base_url` and `max_redirects` are read from `config`.
    pub fn with_transport(transport: T, config: &ClientConfig) -> Self {
        Self {
            transport,
            base_url: config.normalized_base_url(),
            max_redirects: config.max_redirects,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves a latitude/longitude to its forecast grid cell.
    ///
    /// `301` responses are followed through their `Location` header, resolved
    /// against the base URL, for at most `max_redirects` hops. When the cap is
    /// reached the last response is evaluated like any other, so a trailing
    /// `301` surfaces as [`WeatherApiError::Api`].
    pub async fn resolve_grid_point(&self, lat: f64, lon: f64) -> Result<GridPoint, WeatherApiError> {
        let url = format!("{}/points/{},{}", self.base_url, lat, lon);
        let (final_url, response) = self.get_following_redirects(url).await?;
        let points: PointsV1 = decode(&final_url, response)?;
        Ok(points.into_grid_point())
    }

    /// Fetches the hourly forecast periods for a grid cell, in the order the API returns them.
    pub async fn fetch_hourly_forecast(
        &self,
        region: &str,
        grid_x: u32,
        grid_y: u32,
    ) -> Result<Vec<HourlyPeriod>, WeatherApiError> {
        let url = format!(
            "{}/gridpoints/{}/{},{}/forecast/hourly",
            self.base_url, region, grid_x, grid_y
        );
        let response = self.get(&url).await?;
        let forecast: HourlyForecastV1 = decode(&url, response)?;
        forecast
            .into_periods()
            .map_err(|source| WeatherApiError::Parse { url, source })
    }

    /// Lists the observation stations attached to a grid cell.
    ///
    /// A payload without a `features` array yields an empty list.
    pub async fn fetch_stations(
        &self,
        region: &str,
        grid_x: u32,
        grid_y: u32,
    ) -> Result<Vec<Station>, WeatherApiError> {
        let url = format!(
            "{}/gridpoints/{}/{},{}/stations",
            self.base_url, region, grid_x, grid_y
        );
        let response = self.get(&url).await?;
        let stations: StationsV1 = decode(&url, response)?;
        Ok(stations.into_stations())
    }

    pub async fn fetch_latest_observation(
        &self,
        station_id: &str,
    ) -> Result<Observation, WeatherApiError> {
        let url = format!(
            "{}/stations/{}/observations/latest",
            self.base_url, station_id
        );
        let response = self.get(&url).await?;
        let observation: ObservationV1 = decode(&url, response)?;
        Ok(observation.into_observation())
    }

    /// [`resolve_grid_point`](Self::resolve_grid_point), abandoned with
    /// [`WeatherApiError::Timeout`] once `timeout` elapses.
    ///
    /// Only the local wait stops; a request already on the wire is dropped, not cancelled upstream.
    pub async fn resolve_grid_point_within(
        &self,
        lat: f64,
        lon: f64,
        timeout: Duration,
    ) -> Result<GridPoint, WeatherApiError> {
        within(
            "resolve_grid_point",
            timeout,
            self.resolve_grid_point(lat, lon),
        )
        .await
    }

    /// [`fetch_hourly_forecast`](Self::fetch_hourly_forecast) with a deadline, see
    /// [`resolve_grid_point_within`](Self::resolve_grid_point_within).
    pub async fn fetch_hourly_forecast_within(
        &self,
        region: &str,
        grid_x: u32,
        grid_y: u32,
        timeout: Duration,
    ) -> Result<Vec<HourlyPeriod>, WeatherApiError> {
        within(
            "fetch_hourly_forecast",
            timeout,
            self.fetch_hourly_forecast(region, grid_x, grid_y),
        )
        .await
    }

    async fn get(&self, url: &str) -> Result<RawResponse, WeatherApiError> {
        info!("GET {}", url);
        self.transport
            .get(url)
            .await
            .map_err(|source| WeatherApiError::Connection {
                url: url.to_string(),
                source,
            })
    }

    async fn get_following_redirects(
        &self,
        url: String,
    ) -> Result<(String, RawResponse), WeatherApiError> {
        let mut current_url = url;
        let mut response = self.get(&current_url).await?;
        let mut hops = 0;

        while response.status == StatusCode::MOVED_PERMANENTLY {
            if hops >= self.max_redirects {
                warn!(
                    "Stopped following redirects for {} after {} hops",
                    current_url, hops
                );
                break;
            }
            let Some(location) = response.location.as_deref() else {
                warn!("Redirect from {} has no Location header", current_url);
                break;
            };

            let next_url = self.absolute_url(location);
            debug!("Following redirect {} -> {}", current_url, next_url);
            response = self.get(&next_url).await?;
            current_url = next_url;
            hops += 1;
        }

        Ok((current_url, response))
    }

    fn absolute_url(&self, location: &str) -> String {
        if location.starts_with("http://") || location.starts_with("https://") {
            location.to_string()
        } else if location.starts_with('/') {
            format!("{}{}", self.base_url, location)
        } else {
            format!("{}/{}", self.base_url, location)
        }
    }
}

fn decode<D: DeserializeOwned>(url: &str, response: RawResponse) -> Result<D, WeatherApiError> {
    if !response.status.is_success() {
        let body = String::from_utf8_lossy(&response.body).into_owned();
        warn!(
            "GET {} returned {} with body: {}",
            url, response.status, body
        );
        return Err(WeatherApiError::Api {
            status: response.status,
            request: format!("GET {url}"),
            body,
        });
    }

    serde_json::from_slice(&response.body).map_err(|source| {
        warn!("Unexpected payload from {}: {}", url, source);
        WeatherApiError::Parse {
            url: url.to_string(),
            source,
        }
    })
}

async fn within<F, R>(operation: &'static str, timeout: Duration, future: F) -> Result<R, WeatherApiError>
where
    F: Future<Output = Result<R, WeatherApiError>>,
{
    tokio::time::timeout(timeout, future)
        .await
        .map_err(|_| WeatherApiError::Timeout {
            operation,
            after: timeout,
        })?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::TransportError;
    use crate::api::mock::{fixtures, MockReply, MockTransport};
    use serde_json::json;

    fn client(transport: MockTransport) -> WeatherClient<MockTransport> {
        let config = ClientConfig::builder().base_url("http://mock.test").build();
        WeatherClient::with_transport(transport, &config)
    }

    #[tokio::test]
    async fn test_resolve_grid_point() -> Result<(), WeatherApiError> {
        let client = client(MockTransport::new().route(
            "/points/39.0473,-95.6752",
            MockReply::Json(200, fixtures::points("TOP", 31, 80)),
        ));

        let grid = client.resolve_grid_point(39.0473, -95.6752).await?;
        assert_eq!(
            grid,
            GridPoint {
                region: "TOP".to_string(),
                grid_x: 31,
                grid_y: 80,
                display_name: "Topeka, KS".to_string(),
            }
        );
        assert_eq!(
            client.transport.requests(),
            vec!["http://mock.test/points/39.0473,-95.6752"]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_grid_point_follows_relative_redirect() -> Result<(), WeatherApiError> {
        let client = client(
            MockTransport::new()
                .route(
                    "/points/39.047312,-95.675199",
                    MockReply::Redirect("/points/39.0473,-95.6752".to_string()),
                )
                .route(
                    "/points/39.0473,-95.6752",
                    MockReply::Json(200, fixtures::points("TOP", 31, 80)),
                ),
        );

        let grid = client.resolve_grid_point(39.047312, -95.675199).await?;
        assert_eq!(grid.region, "TOP");
        assert_eq!(
            client.transport.requests(),
            vec![
                "http://mock.test/points/39.047312,-95.675199",
                "http://mock.test/points/39.0473,-95.6752",
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_redirect_loop_is_capped() {
        let client = client(
            MockTransport::new().route("/points/", MockReply::Redirect("/points/1,2".to_string())),
        );

        let result = client.resolve_grid_point(1.0, 2.0).await;

        // first request plus five hops
        assert_eq!(client.transport.requests().len(), 6);
        match result {
            Err(WeatherApiError::Api { status, .. }) => {
                assert_eq!(status, StatusCode::MOVED_PERMANENTLY)
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_redirect_cap_is_configurable() {
        let config = ClientConfig::builder()
            .base_url("http://mock.test")
            .max_redirects(2)
            .build();
        let transport =
            MockTransport::new().route("/points/", MockReply::Redirect("/points/1,2".to_string()));
        let client = WeatherClient::with_transport(transport, &config);

        assert!(client.resolve_grid_point(1.0, 2.0).await.is_err());
        assert_eq!(client.transport.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_other_endpoints_do_not_follow_redirects() {
        let client = client(MockTransport::new().route(
            "/forecast/hourly",
            MockReply::Redirect("/gridpoints/TOP/1,1/forecast/hourly".to_string()),
        ));

        let result = client.fetch_hourly_forecast("TOP", 31, 80).await;
        assert_eq!(
            result.err().and_then(|e| e.status()),
            Some(StatusCode::MOVED_PERMANENTLY)
        );
        assert_eq!(client.transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_non_success_status_is_api_error() {
        let client = client(MockTransport::new().route(
            "/points/",
            MockReply::Json(404, json!({ "title": "Data Unavailable For Requested Point" })),
        ));

        match client.resolve_grid_point(51.5, -0.12).await {
            Err(WeatherApiError::Api {
                status,
                request,
                body,
            }) => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(request, "GET http://mock.test/points/51.5,-0.12");
                assert!(body.contains("Data Unavailable"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let client = client(
            MockTransport::new()
                .route("/forecast/hourly", MockReply::Text(200, "<html>".to_string())),
        );

        let result = client.fetch_hourly_forecast("TOP", 31, 80).await;
        assert!(matches!(result, Err(WeatherApiError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_transport_failure_is_connection_error() {
        let client = client(
            MockTransport::new().route("/stations", MockReply::Fail("connection refused".to_string())),
        );

        match client.fetch_stations("TOP", 31, 80).await {
            Err(WeatherApiError::Connection { url, source }) => {
                assert_eq!(url, "http://mock.test/gridpoints/TOP/31,80/stations");
                assert!(matches!(source, TransportError::Other(_)));
            }
            other => panic!("expected Connection error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_hourly_forecast_keeps_order() -> Result<(), WeatherApiError> {
        let body = fixtures::hourly(&[
            fixtures::period("2024-07-01T06:00:00-05:00", 60, "Sunny", true),
            fixtures::period("2024-07-01T07:00:00-05:00", 62, "Sunny", true),
            fixtures::period("2024-07-01T08:00:00-05:00", 65, "Mostly Sunny", true),
        ]);
        let client =
            client(MockTransport::new().route("/gridpoints/TOP/31,80/forecast/hourly", MockReply::Json(200, body)));

        let periods = client.fetch_hourly_forecast("TOP", 31, 80).await?;
        let temps: Vec<i32> = periods.iter().map(|p| p.temperature).collect();
        assert_eq!(temps, vec![60, 62, 65]);
        assert!(periods.windows(2).all(|w| w[0].start_time < w[1].start_time));
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_latest_observation() -> Result<(), WeatherApiError> {
        let client = client(MockTransport::new().route(
            "/stations/KTOP/observations/latest",
            MockReply::Json(200, fixtures::observation()),
        ));

        let observation = client.fetch_latest_observation("KTOP").await?;
        assert_eq!(observation.wind_direction.value, Some(180.0));
        assert_eq!(observation.wind_chill.value, None);
        Ok(())
    }

    struct StalledTransport;

    impl Transport for StalledTransport {
        fn get(
            &self,
            _url: &str,
        ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send {
            std::future::pending::<Result<RawResponse, TransportError>>()
        }
    }

    #[tokio::test]
    async fn test_deadline_surfaces_timeout() {
        let client = WeatherClient::with_transport(StalledTransport, &ClientConfig::default());

        let result = client
            .resolve_grid_point_within(39.0, -95.0, Duration::from_millis(20))
            .await;
        assert!(matches!(
            result,
            Err(WeatherApiError::Timeout {
                operation: "resolve_grid_point",
                ..
            })
        ));

        let result = client
            .fetch_hourly_forecast_within("TOP", 31, 80, Duration::from_millis(20))
            .await;
        assert!(matches!(result, Err(WeatherApiError::Timeout { .. })));
    }
}
