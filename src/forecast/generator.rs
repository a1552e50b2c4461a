use chrono::{Days, NaiveDate};
use rand::Rng;

use super::models::{ForecastRecord, MAX_TEMPERATURE_C, MIN_TEMPERATURE_C, Summary};

/// Number of days in every forecast.
pub const FORECAST_DAYS: u64 = 5;

/// Build the forecast for the days following `today`.
///
/// Records come back in ascending date order, the first one dated tomorrow.
/// Each record draws its temperature first and its summary second.
pub fn generate<R: Rng>(today: NaiveDate, rng: &mut R) -> Vec<ForecastRecord> {
    (1..=FORECAST_DAYS)
        .map(|offset| {
            let date = today + Days::new(offset);
            let temperature_c = rng.random_range(MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C);
            let summary = Summary::ALL[rng.random_range(0..Summary::ALL.len())];
            ForecastRecord::new(date, temperature_c, summary)
        })
        .collect()
}
