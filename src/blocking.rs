//! Synchronous wrapper for callers without an async runtime.

use crate::api::config::ClientConfig;
use crate::error::ForecastError;
use crate::forecaster::{Forecaster, LocationForecast, DEFAULT_MAX_DAYS};
use crate::icons::catalog::IconCatalog;
use crate::stations::locate_station::{NearestStation, StationLocator};
use crate::types::day_summary::DaySummary;
use crate::types::grid_point::GridPoint;
use crate::types::hourly_period::HourlyPeriod;
use crate::types::station::LatLon;
use crate::types::unit::TemperatureUnit;
use std::sync::Arc;
use tokio::runtime::{Builder, Runtime};

/// A [`Forecaster`] driven by its own current-thread tokio runtime.
///
/// Every method blocks the calling thread until the request completes. Do not
/// call these from inside an async context; use [`Forecaster`] there instead.
///
/// ```no_run
/// # use nws_forecast::{BlockingClient, ForecastError, IconCatalog};
/// # use std::sync::Arc;
/// # fn main() -> Result<(), ForecastError> {
/// let client = BlockingClient::new(Arc::new(IconCatalog::load("assets/icons")?))?;
/// let grid = client.resolve_grid_point(39.0473, -95.6752)?;
/// let periods = client.fetch_hourly_forecast(&grid)?;
/// println!("{} periods for {}", periods.len(), grid);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct BlockingClient {
    runtime: Runtime,
    forecaster: Forecaster,
}

impl BlockingClient {
    pub fn new(catalog: Arc<IconCatalog>) -> Result<Self, ForecastError> {
        Self::with_config(ClientConfig::default(), catalog)
    }

    pub fn with_config(config: ClientConfig, catalog: Arc<IconCatalog>) -> Result<Self, ForecastError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ForecastError::Runtime)?;
        let forecaster = Forecaster::with_config(config, catalog)?;
        Ok(Self { runtime, forecaster })
    }

    pub fn forecaster(&self) -> &Forecaster {
        &self.forecaster
    }

    pub fn resolve_grid_point(&self, lat: f64, lon: f64) -> Result<GridPoint, ForecastError> {
        let grid = self
            .runtime
            .block_on(self.forecaster.client().resolve_grid_point(lat, lon))?;
        Ok(grid)
    }

    pub fn fetch_hourly_forecast(&self, grid: &GridPoint) -> Result<Vec<HourlyPeriod>, ForecastError> {
        let periods = self.runtime.block_on(self.forecaster.client().fetch_hourly_forecast(
            &grid.region,
            grid.grid_x,
            grid.grid_y,
        ))?;
        Ok(periods)
    }

    /// Never fails; see [`StationLocator::nearest_station`].
    pub fn nearest_station(&self, grid: &GridPoint, lat: f64, lon: f64) -> NearestStation {
        let locator = StationLocator::new(self.forecaster.client());
        self.runtime.block_on(locator.nearest_station(
            &grid.region,
            grid.grid_x,
            grid.grid_y,
            lat,
            lon,
        ))
    }

    /// Summarizes periods into at most `max_days` days. Does not touch the network.
    pub fn group_by_day(
        &self,
        periods: &[HourlyPeriod],
        max_days: usize,
        unit: TemperatureUnit,
    ) -> Vec<DaySummary> {
        self.forecaster.summarize(periods, max_days, unit)
    }

    /// Runs the whole pipeline with [`DEFAULT_MAX_DAYS`] days in `unit`.
    pub fn forecast(&self, location: LatLon, unit: TemperatureUnit) -> Result<LocationForecast, ForecastError> {
        self.runtime.block_on(
            self.forecaster
                .forecast()
                .location(location)
                .max_days(DEFAULT_MAX_DAYS)
                .unit(unit)
                .call(),
        )
    }
}
