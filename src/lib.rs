mod aggregation;
mod api;
mod axis_scaler;
mod blocking;
mod error;
mod forecaster;
mod icons;
mod stations;
mod types;

pub use error::ForecastError;
pub use forecaster::*;
pub use blocking::BlockingClient;

pub use api::client::WeatherClient;
pub use api::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_MAX_REDIRECTS, DEFAULT_REQUEST_TIMEOUT};
pub use api::transport::{RawResponse, ReqwestTransport, Transport};

pub use aggregation::day_aggregator::DayAggregator;
pub use axis_scaler::*;
pub use icons::catalog::IconCatalog;
pub use icons::resolver::IconResolver;
pub use stations::geo_distance::{haversine_km, nearest, planar_distance};
pub use stations::locate_station::*;

pub use types::day_summary::DaySummary;
pub use types::grid_point::GridPoint;
pub use types::hourly_period::HourlyPeriod;
pub use types::icon_asset::{IconAsset, FALLBACK_ICON_PATH};
pub use types::observation::{MeasuredValue, Observation};
pub use types::station::{LatLon, Station};
pub use types::unit::TemperatureUnit;

pub use api::error::{TransportError, WeatherApiError};
pub use icons::error::IconError;
