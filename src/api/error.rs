use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Failure raised by a [`Transport`](crate::Transport) before any HTTP status was received.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum WeatherApiError {
    // Not retried; the caller decides whether to try again.
    #[error("Connection failed for {url}")]
    Connection {
        url: String,
        #[source]
        source: TransportError,
    },

    #[error("{request} failed with status {status}")]
    Api {
        status: StatusCode,
        request: String,
        body: String,
    },

    #[error("Failed to parse response from {url}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{operation} did not complete within {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },

    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl WeatherApiError {
    /// The HTTP status of an [`WeatherApiError::Api`] failure.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            WeatherApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
