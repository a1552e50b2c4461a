//! Forecast domain.
//!
//! Pure library code: the record type, the summary catalog, and the
//! generator that builds a five-day forecast from an injected clock and
//! an injected entropy source. Nothing here knows about HTTP.

mod clock;
mod entropy;
mod generator;
mod models;

#[cfg(test)]
mod generator_test;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entropy::{EntropySource, SeededEntropy, ThreadEntropy};
pub use generator::{FORECAST_DAYS, generate};
pub use models::{ForecastRecord, MAX_TEMPERATURE_C, MIN_TEMPERATURE_C, Summary};
