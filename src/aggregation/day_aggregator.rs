//! Folds hourly forecast periods into per-day summaries.

use crate::icons::resolver::IconResolver;
use crate::types::day_summary::DaySummary;
use crate::types::hourly_period::HourlyPeriod;
use crate::types::unit::TemperatureUnit;
use chrono::NaiveDate;

/// Builds [`DaySummary`] records in a caller-chosen display unit.
///
/// The aggregator holds no state between calls; summaries are always rebuilt
/// from the full period slice they are given.
#[derive(Debug, Clone, Copy)]
pub struct DayAggregator<'a> {
    icons: &'a IconResolver,
    unit: TemperatureUnit,
}

impl<'a> DayAggregator<'a> {
    pub fn new(icons: &'a IconResolver, unit: TemperatureUnit) -> Self {
        Self { icons, unit }
    }

    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Groups `periods` by local calendar day and summarizes up to `max_days` days.
    ///
    /// Days appear in the order their first period is encountered, and each date
    /// appears at most once. Collection stops at the first period that would start
    /// day `max_days + 1`. An empty input gives an empty result.
    ///
    /// Per day:
    /// * `min_temp`/`max_temp` are taken over the temperatures converted to the display unit.
    /// * `avg_humidity` and `avg_wind_speed_mph` are truncating integer means; the
    ///   wind speed of a period is the leading integer of its wind text.
    /// * `max_precip_probability` treats a missing probability as 0.
    /// * `dominant_condition` is the most frequent short forecast, ties going to the
    ///   label seen first, and `dominant_is_daytime` is the daytime flag of that
    ///   label's last occurrence.
    /// * `icon` is resolved for the dominant condition, night when it was last seen
    ///   at night, falling back to the resolver's fallback asset.
    pub fn group_by_day(&self, periods: &[HourlyPeriod], max_days: usize) -> Vec<DaySummary> {
        let mut days: Vec<(NaiveDate, Vec<&HourlyPeriod>)> = Vec::new();

        for period in periods {
            let date = period.local_date();
            match days.iter().position(|(day, _)| *day == date) {
                Some(index) => days[index].1.push(period),
                None if days.len() < max_days => days.push((date, vec![period])),
                None => break,
            }
        }

        days.into_iter()
            .map(|(date, group)| self.summarize(date, &group))
            .collect()
    }

    fn summarize(&self, date: NaiveDate, group: &[&HourlyPeriod]) -> DaySummary {
        let count = group.len().max(1) as u64;

        let temps = group.iter().map(|p| p.temperature_in(self.unit));
        let min_temp = temps.clone().min().unwrap_or_default();
        let max_temp = temps.max().unwrap_or_default();

        let humidity_sum: u64 = group.iter().map(|p| u64::from(p.relative_humidity)).sum();
        let wind_sum: u64 = group.iter().map(|p| u64::from(p.wind_speed_mph())).sum();
        let max_precip_probability = group
            .iter()
            .map(|p| p.precip_probability.unwrap_or(0))
            .max()
            .unwrap_or(0);

        let (dominant_condition, dominant_is_daytime) = dominant_condition(group);
        let icon = self
            .icons
            .resolve_or_fallback(&dominant_condition, !dominant_is_daytime)
            .clone();

        DaySummary {
            date,
            unit: self.unit,
            min_temp,
            max_temp,
            avg_humidity: (humidity_sum / count) as u8,
            // a mean of u32 values always fits back into u32
            avg_wind_speed_mph: (wind_sum / count) as u32,
            max_precip_probability,
            dominant_condition,
            dominant_is_daytime,
            icon,
        }
    }
}

struct Tally<'p> {
    label: &'p str,
    count: usize,
    is_daytime: bool,
}

fn dominant_condition(group: &[&HourlyPeriod]) -> (String, bool) {
    let mut tallies: Vec<Tally> = Vec::new();
    for period in group {
        match tallies
            .iter_mut()
            .find(|tally| tally.label == period.short_forecast)
        {
            Some(tally) => {
                tally.count += 1;
                tally.is_daytime = period.is_daytime;
            }
            None => tallies.push(Tally {
                label: &period.short_forecast,
                count: 1,
                is_daytime: period.is_daytime,
            }),
        }
    }

    let mut dominant: Option<&Tally> = None;
    for tally in &tallies {
        if dominant.map_or(true, |best| tally.count > best.count) {
            dominant = Some(tally);
        }
    }

    dominant
        .map(|tally| (tally.label.to_string(), tally.is_daytime))
        .unwrap_or_default()
}
