//! API route configuration.

use axum::Json;
use axum::Router;
use axum::routing::get;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{self, ForecastResponse};
use super::state::AppState;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Forecast API",
        version = "0.1.0",
        description = "Synthetic five-day weather forecasts",
        license(name = "GPL-2.0")
    ),
    paths(handlers::get_weather_forecast),
    components(schemas(ForecastResponse)),
    tags(
        (name = "forecast", description = "Weather forecast endpoints")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Create the API router.
///
/// With `docs` set, the Scalar UI is served at `/docs` and the raw OpenAPI
/// description at `/openapi.json`.
pub fn create_router(state: AppState, docs: bool) -> Router {
    let router = Router::new()
        .route("/weatherforecast", get(handlers::get_weather_forecast))
        .with_state(state);

    if !docs {
        return router;
    }

    router
        .route("/openapi.json", get(openapi_json))
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
