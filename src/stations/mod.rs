pub mod geo_distance;
pub mod locate_station;
