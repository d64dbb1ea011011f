//! Distance helpers for picking the closest of a set of points.

use crate::types::station::LatLon;
use haversine::{distance, Location as HaversineLocation, Units};
use ordered_float::OrderedFloat;

/// Euclidean distance treating latitude and longitude as planar coordinates.
///
/// This is only meaningful for ranking points a few tens of kilometers apart,
/// which is the scale of the stations attached to one forecast grid cell.
pub fn planar_distance(a: LatLon, b: LatLon) -> f64 {
    let d_lat = a.0 - b.0;
    let d_lon = a.1 - b.1;
    (d_lat * d_lat + d_lon * d_lon).sqrt()
}

/// Great-circle distance in kilometers.
pub fn haversine_km(a: LatLon, b: LatLon) -> f64 {
    distance(
        HaversineLocation {
            latitude: a.0,
            longitude: a.1,
        },
        HaversineLocation {
            latitude: b.0,
            longitude: b.1,
        },
        Units::Kilometers,
    )
}

/// Returns the item whose location is planar-closest to `point`.
///
/// Ties resolve to the earliest item in iteration order. `None` for an empty input.
pub fn nearest<'a, T, I, F>(items: I, point: LatLon, location: F) -> Option<&'a T>
where
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> LatLon,
{
    // min_by_key keeps the first of several equal minima
    items
        .into_iter()
        .min_by_key(|item| OrderedFloat(planar_distance(location(*item), point)))
}
