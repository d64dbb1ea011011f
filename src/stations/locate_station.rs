use crate::api::client::WeatherClient;
use crate::api::transport::Transport;
use crate::stations::geo_distance::nearest;
use crate::types::station::{LatLon, Station};
use log::{debug, warn};

/// Identifier reported by [`NearestStation::id`] when no station could be found.
pub const NO_STATIONS_ID: &str = "NO_STATIONS";

/// Outcome of a nearest-station lookup.
///
/// Station lookup never fails its caller: an empty listing and a failed
/// listing request both end up as [`NearestStation::NoStations`].
#[derive(Debug, Clone, PartialEq)]
pub enum NearestStation {
    Found(Station),
    NoStations,
}

impl NearestStation {
    /// The station id, or [`NO_STATIONS_ID`].
    pub fn id(&self) -> &str {
        match self {
            NearestStation::Found(station) => &station.id,
            NearestStation::NoStations => NO_STATIONS_ID,
        }
    }

    pub fn station(&self) -> Option<&Station> {
        match self {
            NearestStation::Found(station) => Some(station),
            NearestStation::NoStations => None,
        }
    }
}

/// Picks the observation station closest to a point from a grid cell's station list.
pub struct StationLocator<'a, T: Transport> {
    client: &'a WeatherClient<T>,
}

impl<'a, T: Transport> StationLocator<'a, T> {
    pub fn new(client: &'a WeatherClient<T>) -> Self {
        Self { client }
    }

    /// Fetches the stations of grid cell `region/grid_x,grid_y` and returns the one
    /// nearest to `lat`/`lon` by planar distance.
    pub async fn nearest_station(
        &self,
        region: &str,
        grid_x: u32,
        grid_y: u32,
        lat: f64,
        lon: f64,
    ) -> NearestStation {
        let stations = match self.client.fetch_stations(region, grid_x, grid_y).await {
            Ok(stations) => stations,
            Err(e) => {
                warn!(
                    "Station lookup for {}/{},{} failed, continuing without observations: {}",
                    region, grid_x, grid_y, e
                );
                return NearestStation::NoStations;
            }
        };

        match closest_station(&stations, LatLon(lat, lon)) {
            Some(station) => {
                debug!(
                    "Nearest of {} stations to ({}, {}) is {}",
                    stations.len(),
                    lat,
                    lon,
                    station.id
                );
                NearestStation::Found(station.clone())
            }
            None => {
                warn!("Grid {}/{},{} lists no stations", region, grid_x, grid_y);
                NearestStation::NoStations
            }
        }
    }
}

/// The planar-closest station to `point`; ties go to the first listed.
pub fn closest_station(stations: &[Station], point: LatLon) -> Option<&Station> {
    nearest(stations, point, Station::location)
}
