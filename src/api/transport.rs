//! The HTTP seam under [`WeatherClient`](crate::WeatherClient).
//!
//! The client only needs "GET this URL and give me status, `Location` and body",
//! so that is all a transport has to provide. [`ReqwestTransport`] is the real
//! implementation; tests substitute scripted transports.

use crate::api::config::ClientConfig;
use crate::api::error::{TransportError, WeatherApiError};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, LOCATION};
use reqwest::redirect::Policy;
use reqwest::{Client, StatusCode};
use std::future::Future;

/// A response as seen by the client, before any status handling.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    /// The `Location` header, if present and valid UTF-8.
    pub location: Option<String>,
    pub body: Vec<u8>,
}

/// Issues a single GET request. Implementations must not follow redirects themselves.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, WeatherApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/geo+json"));

        let client = Client::builder()
            .redirect(Policy::none())
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .default_headers(headers)
            .gzip(true)
            .build()
            .map_err(|e| WeatherApiError::InvalidConfig(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse {
            status,
            location,
            body,
        })
    }
}
