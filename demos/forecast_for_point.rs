use nws_forecast::{AxisScaler, ForecastError, Forecaster, IconCatalog, LatLon, Padding, TemperatureUnit};
use std::env;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), ForecastError> {
    // usage: forecast_for_point [icon dir]
    let icon_dir = env::args().nth(1).unwrap_or_else(|| "assets/icons".to_string());
    let catalog = Arc::new(IconCatalog::load(&icon_dir)?);
    let forecaster = Forecaster::new(catalog)?;

    // Topeka, KS
    let forecast = forecaster
        .forecast()
        .location(LatLon(39.0473, -95.6752))
        .max_days(5)
        .unit(TemperatureUnit::Celsius)
        .timeout(Duration::from_secs(15))
        .call()
        .await?;

    println!("{} (nearest station: {})", forecast.grid, forecast.station.id());
    if let Some(km) = forecast.station_distance_km {
        println!("Station is {:.1} km away", km);
    }
    if let Some(observation) = &forecast.observation {
        println!("Now: {:?} {:?}", observation.text_description, observation.temperature.value);
    }

    for day in &forecast.days {
        println!(
            "{}  {:>3}{} .. {:>3}{}  {:>3}% rain  {:<32} {}",
            day.date,
            day.min_temp,
            day.unit,
            day.max_temp,
            day.unit,
            day.max_precip_probability,
            day.dominant_condition,
            day.icon.path.display()
        );
    }

    let scale = AxisScaler::new(10, Padding::Temperature).scale_series(
        forecast
            .days
            .iter()
            .flat_map(|day| [f64::from(day.min_temp), f64::from(day.max_temp)]),
    );
    println!("{:#?}", scale);

    Ok(())
}
