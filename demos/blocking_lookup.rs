use nws_forecast::{BlockingClient, ForecastError, IconCatalog, TemperatureUnit};
use std::sync::Arc;

fn main() -> Result<(), ForecastError> {
    let client = BlockingClient::new(Arc::new(IconCatalog::default()))?;

    let (lat, lon) = (47.6062, -122.3321);
    let grid = client.resolve_grid_point(lat, lon)?;
    let periods = client.fetch_hourly_forecast(&grid)?;
    let station = client.nearest_station(&grid, lat, lon);

    println!("{} has {} hourly periods, station {}", grid, periods.len(), station.id());
    for day in client.group_by_day(&periods, 3, TemperatureUnit::Fahrenheit) {
        println!("{:#?}", day);
    }

    Ok(())
}
