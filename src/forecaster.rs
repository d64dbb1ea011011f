//! This module provides the main entry point: a [`Forecaster`] runs the whole
//! pipeline for a point, from grid resolution to day summaries with icons.

use crate::aggregation::day_aggregator::DayAggregator;
use crate::api::client::WeatherClient;
use crate::api::config::ClientConfig;
use crate::api::transport::{ReqwestTransport, Transport};
use crate::error::ForecastError;
use crate::icons::catalog::IconCatalog;
use crate::icons::resolver::IconResolver;
use crate::stations::geo_distance::haversine_km;
use crate::stations::locate_station::{NearestStation, StationLocator};
use crate::types::day_summary::DaySummary;
use crate::types::grid_point::GridPoint;
use crate::types::hourly_period::HourlyPeriod;
use crate::types::observation::Observation;
use crate::types::station::LatLon;
use crate::types::unit::TemperatureUnit;
use bon::bon;
use log::{info, warn};
use std::sync::Arc;
use std::time::Duration;

/// Number of days summarized when the caller does not say otherwise.
pub const DEFAULT_MAX_DAYS: usize = 7;

/// Everything the pipeline produced for one location.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationForecast {
    pub grid: GridPoint,
    /// Hourly periods in ascending time order, as fetched.
    pub periods: Vec<HourlyPeriod>,
    pub days: Vec<DaySummary>,
    pub station: NearestStation,
    /// Great-circle distance from the requested location to `station`.
    pub station_distance_km: Option<f64>,
    /// Latest observation of `station`; `None` when no station was found or the
    /// observation could not be fetched.
    pub observation: Option<Observation>,
}

/// The main client struct, combining the weather.gov client with the icon catalog.
///
/// Holds no per-location state: each [`Forecaster::forecast`] call builds a fresh
/// [`LocationForecast`], and the catalog is shared read-only.
///
/// # Examples
///
/// ```no_run
/// # use nws_forecast::{Forecaster, ForecastError, IconCatalog, LatLon, TemperatureUnit};
/// # use std::sync::Arc;
/// # #[tokio::main]
/// # async fn main() -> Result<(), ForecastError> {
/// let catalog = Arc::new(IconCatalog::load("assets/icons")?);
/// let forecaster = Forecaster::new(catalog)?;
///
/// let forecast = forecaster
///     .forecast()
///     .location(LatLon(39.0473, -95.6752))
///     .max_days(3)
///     .unit(TemperatureUnit::Celsius)
///     .call()
///     .await?;
///
/// for day in &forecast.days {
///     println!("{}: {}..{} {}", day.date, day.min_temp, day.max_temp, day.dominant_condition);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Forecaster<T = ReqwestTransport> {
    client: WeatherClient<T>,
    icons: IconResolver,
}

impl Forecaster<ReqwestTransport> {
    /// Creates a forecaster talking to `https://api.weather.gov` with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::WeatherApi`] if the HTTP client cannot be built.
    pub fn new(catalog: Arc<IconCatalog>) -> Result<Self, ForecastError> {
        Self::with_config(ClientConfig::default(), catalog)
    }

    pub fn with_config(config: ClientConfig, catalog: Arc<IconCatalog>) -> Result<Self, ForecastError> {
        let client = WeatherClient::from_config(config)?;
        Ok(Self::from_parts(client, IconResolver::new(catalog)))
    }
}

#[bon]
impl<T: Transport> Forecaster<T> {
    pub fn from_parts(client: WeatherClient<T>, icons: IconResolver) -> Self {
        Self { client, icons }
    }

    pub fn client(&self) -> &WeatherClient<T> {
        &self.client
    }

    pub fn icons(&self) -> &IconResolver {
        &self.icons
    }

    /// Summarizes already fetched periods, e.g. after the display unit changed.
    pub fn summarize(
        &self,
        periods: &[HourlyPeriod],
        max_days: usize,
        unit: TemperatureUnit,
    ) -> Vec<DaySummary> {
        DayAggregator::new(&self.icons, unit).group_by_day(periods, max_days)
    }

    /// Runs the full pipeline for a location.
    ///
    /// Resolves the grid, fetches the hourly forecast, looks up the nearest
    /// station and its latest observation, and summarizes up to `max_days` days.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.location(LatLon)`: **Required.** The point to forecast for.
    /// * `.max_days(usize)`: Optional. Number of day summaries, defaults to [`DEFAULT_MAX_DAYS`].
    /// * `.unit(TemperatureUnit)`: Optional. Display unit of the summaries, defaults to Fahrenheit.
    /// * `.timeout(Duration)`: Optional. Deadline applied separately to grid
    ///   resolution and to the hourly forecast fetch.
    ///
    /// # Errors
    ///
    /// Grid and forecast failures are returned as [`ForecastError::WeatherApi`].
    /// Station and observation failures are not errors; they leave
    /// `station`/`observation` empty.
    #[builder]
    pub async fn forecast(
        &self,
        location: LatLon,
        #[builder(default = DEFAULT_MAX_DAYS)] max_days: usize,
        #[builder(default)] unit: TemperatureUnit,
        timeout: Option<Duration>,
    ) -> Result<LocationForecast, ForecastError> {
        let LatLon(lat, lon) = location;

        let grid = match timeout {
            Some(timeout) => self.client.resolve_grid_point_within(lat, lon, timeout).await?,
            None => self.client.resolve_grid_point(lat, lon).await?,
        };
        info!("Resolved ({}, {}) to grid {}", lat, lon, grid);

        let periods = match timeout {
            Some(timeout) => {
                self.client
                    .fetch_hourly_forecast_within(&grid.region, grid.grid_x, grid.grid_y, timeout)
                    .await?
            }
            None => {
                self.client
                    .fetch_hourly_forecast(&grid.region, grid.grid_x, grid.grid_y)
                    .await?
            }
        };

        let station = StationLocator::new(&self.client)
            .nearest_station(&grid.region, grid.grid_x, grid.grid_y, lat, lon)
            .await;
        let station_distance_km = station
            .station()
            .map(|found| haversine_km(location, found.location()));
        let observation = match station.station() {
            Some(found) => match self.client.fetch_latest_observation(&found.id).await {
                Ok(observation) => Some(observation),
                Err(e) => {
                    warn!("No observation for station {}: {}", found.id, e);
                    None
                }
            },
            None => None,
        };

        let days = self.summarize(&periods, max_days, unit);
        info!(
            "Built {} day summaries from {} hourly periods for {}",
            days.len(),
            periods.len(),
            grid.display_name
        );

        Ok(LocationForecast {
            grid,
            periods,
            days,
            station,
            station_distance_km,
            observation,
        })
    }
}
