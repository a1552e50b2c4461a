//! Weather forecast handler.

use axum::{Json, extract::State};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, instrument};
use utoipa::ToSchema;

use crate::api::AppState;
use crate::forecast::{self, ForecastRecord};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Forecast response DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    /// Forecast day
    #[schema(example = "2024-01-02")]
    pub date: NaiveDate,
    /// Temperature in Celsius, between -20 and 54
    #[schema(example = 21)]
    pub temperature_c: i32,
    /// Descriptive label
    #[schema(example = "Warm")]
    pub summary: Option<String>,
    /// Temperature in Fahrenheit, derived from `temperatureC`
    #[schema(example = 69, read_only)]
    pub temperature_f: i32,
}

impl From<ForecastRecord> for ForecastResponse {
    fn from(r: ForecastRecord) -> Self {
        Self {
            temperature_f: r.temperature_f(),
            date: r.date,
            temperature_c: r.temperature_c,
            summary: Some(r.summary.to_string()),
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Get the weather forecast
///
/// Returns five synthetic forecast days, the first dated tomorrow
#[utoipa::path(
    get,
    path = "/weatherforecast",
    operation_id = "GetWeatherForecast",
    tag = "forecast",
    responses(
        (status = 200, description = "Five-day forecast", body = [ForecastResponse])
    )
)]
#[instrument(skip(state))]
pub async fn get_weather_forecast(State(state): State<AppState>) -> Json<Vec<ForecastResponse>> {
    let today = state.clock().today();
    let mut rng = state.entropy().generator();
    let records = forecast::generate(today, &mut rng);

    debug!(%today, days = records.len(), "Generated forecast");

    Json(records.into_iter().map(ForecastResponse::from).collect())
}
