pub mod day_summary;
pub mod grid_point;
pub mod hourly_period;
pub mod icon_asset;
pub mod observation;
pub mod station;
pub mod unit;
