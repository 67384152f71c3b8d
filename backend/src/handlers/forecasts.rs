//! HTTP handlers for forecast endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use shared::{CommandOutcome, Forecast, Region};

use crate::error::AppResult;
use crate::handlers::RegionQuery;
use crate::services::{Commands, ForecastService};
use crate::AppState;

/// Request body for forecast generation; `{}` uses the configured horizon
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateForecastsRequest {
    pub days_ahead: Option<u32>,
}

/// Query parameters for a forecast preview
#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    pub days_ahead: Option<u32>,
}

/// List stored forecasts, optionally for one region
pub async fn list_forecasts(
    State(state): State<AppState>,
    Query(query): Query<RegionQuery>,
) -> AppResult<Json<Vec<Forecast>>> {
    let mut forecasts = state.store.forecasts.get_all().await?;
    if let Some(tag) = query.region {
        let canonical = Region::from_tag(&tag).map(|r| r.as_str());
        forecasts.retain(|f| Some(f.region.as_str()) == canonical);
    }
    Ok(Json(forecasts))
}

/// Forecast every region and store the results
pub async fn generate_forecasts(
    State(state): State<AppState>,
    Json(request): Json<GenerateForecastsRequest>,
) -> Json<CommandOutcome<Vec<Forecast>>> {
    let commands = Commands::new(state.store, state.config.forecast);
    Json(commands.generate_forecasts(request.days_ahead).await)
}

/// Replace a stored forecast; the stored copy is flagged as updated
pub async fn update_forecast(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(mut forecast): Json<Forecast>,
) -> Json<CommandOutcome<Forecast>> {
    forecast.id = id;
    let commands = Commands::new(state.store, state.config.forecast);
    Json(commands.update_forecast(forecast).await)
}

/// Remove every stored forecast
pub async fn clear_forecasts(State(state): State<AppState>) -> Json<CommandOutcome<()>> {
    let commands = Commands::new(state.store, state.config.forecast);
    Json(commands.clear_forecasts().await)
}

/// Accuracy of one stored forecast against its actual observation
pub async fn evaluate_forecast(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Json<CommandOutcome<f64>> {
    let commands = Commands::new(state.store, state.config.forecast);
    Json(commands.evaluate_forecast(id).await)
}

/// Forecasts for one region without storing them
///
/// An unknown region yields no forecasts.
pub async fn preview_region_forecast(
    State(state): State<AppState>,
    Path(tag): Path<String>,
    Query(query): Query<PreviewQuery>,
) -> AppResult<Json<Vec<Forecast>>> {
    let settings = state.config.forecast;
    let Some(region) = Region::from_tag(&tag) else {
        return Ok(Json(Vec::new()));
    };

    let service = ForecastService::new(state.store, settings);
    let forecasts = service
        .forecast_region(region, query.days_ahead.unwrap_or(settings.days_ahead))
        .await?;
    Ok(Json(forecasts))
}
