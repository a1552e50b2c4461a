//! Forecast value types.

use std::fmt;

use chrono::NaiveDate;

/// Lowest temperature the generator will draw, in Celsius.
pub const MIN_TEMPERATURE_C: i32 = -20;
/// Highest temperature the generator will draw, in Celsius.
pub const MAX_TEMPERATURE_C: i32 = 54;

/// Descriptive label attached to a forecast day.
///
/// Variants are declared in catalog order, coldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Summary {
    Freezing,
    Bracing,
    Chilly,
    Cool,
    Mild,
    Warm,
    Balmy,
    Hot,
    Sweltering,
    Scorching,
}

impl Summary {
    /// Full catalog in order. Generation picks uniformly by index.
    pub const ALL: [Summary; 10] = [
        Summary::Freezing,
        Summary::Bracing,
        Summary::Chilly,
        Summary::Cool,
        Summary::Mild,
        Summary::Warm,
        Summary::Balmy,
        Summary::Hot,
        Summary::Sweltering,
        Summary::Scorching,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Summary::Freezing => "Freezing",
            Summary::Bracing => "Bracing",
            Summary::Chilly => "Chilly",
            Summary::Cool => "Cool",
            Summary::Mild => "Mild",
            Summary::Warm => "Warm",
            Summary::Balmy => "Balmy",
            Summary::Hot => "Hot",
            Summary::Sweltering => "Sweltering",
            Summary::Scorching => "Scorching",
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One day's synthetic forecast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRecord {
    pub date: NaiveDate,
    pub temperature_c: i32,
    pub summary: Summary,
}

impl ForecastRecord {
    pub fn new(date: NaiveDate, temperature_c: i32, summary: Summary) -> Self {
        Self {
            date,
            temperature_c,
            summary,
        }
    }

    /// Fahrenheit approximation: `32 + c / 0.5556`, truncated toward zero.
    ///
    /// Truncation (not rounding) means 54 °C reports 129 and -20 °C reports -3.
    pub fn temperature_f(&self) -> i32 {
        32 + (f64::from(self.temperature_c) / 0.5556) as i32
    }
}
