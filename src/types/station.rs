//! Geographic points and observation stations.

use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use nws_forecast::LatLon;
///
/// let topeka = LatLon(39.0473, -95.6752);
/// assert_eq!(topeka.0, 39.0473); // Latitude
/// assert_eq!(topeka.1, -95.6752); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon(pub f64, pub f64);

/// An observation station attached to a forecast grid.
///
/// Built per lookup from the gridpoint stations listing; nothing beyond the
/// identifier and position is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// The station identifier used by the observations endpoint (e.g. "KTOP").
    pub id: String,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
}

impl Station {
    pub fn location(&self) -> LatLon {
        LatLon(self.lat, self.lon)
    }
}
