use crate::api::error::WeatherApiError;
use crate::icons::error::IconError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error(transparent)]
    WeatherApi(#[from] WeatherApiError),

    #[error(transparent)]
    Icon(#[from] IconError),

    #[error("Failed to start the blocking runtime")]
    Runtime(#[source] std::io::Error),
}
