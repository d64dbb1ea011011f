use bon::Builder;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.weather.gov";
pub const DEFAULT_MAX_REDIRECTS: usize = 5;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Settings for [`WeatherClient`](crate::WeatherClient) and its HTTP transport.
///
/// # Examples
///
/// ```
/// use nws_forecast::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::builder()
///     .user_agent("my-weather-app (ops@example.com)")
///     .request_timeout(Duration::from_secs(5))
///     .build();
/// assert_eq!(config.base_url, "https://api.weather.gov");
/// assert_eq!(config.max_redirects, 5);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct ClientConfig {
    /// Scheme and host of the API; redirect targets are resolved against it.
    #[builder(into, default = DEFAULT_BASE_URL.to_string())]
    pub base_url: String,
    /// Sent with every request. The upstream rejects anonymous clients.
    #[builder(into, default = default_user_agent())]
    pub user_agent: String,
    /// Client-side timeout applied by the HTTP transport to each request.
    #[builder(default = DEFAULT_REQUEST_TIMEOUT)]
    pub request_timeout: Duration,
    /// Maximum number of 301 hops followed when resolving a grid point.
    #[builder(default = DEFAULT_MAX_REDIRECTS)]
    pub max_redirects: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ClientConfig {
    /// The base URL without a trailing slash.
    pub(crate) fn normalized_base_url(&self) -> String {
        self.base_url.trim_end_matches('/').to_string()
    }
}
