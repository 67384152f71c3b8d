//! HTTP handlers for observation management endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use shared::{CommandOutcome, Observation, ObservationInput, Region};

use crate::error::AppResult;
use crate::services::{commands::LoadedData, Commands, RegionalService};
use crate::AppState;

/// Optional region filter
#[derive(Debug, Deserialize)]
pub struct RegionQuery {
    pub region: Option<String>,
}

/// Load every stored observation and forecast
pub async fn load_all(State(state): State<AppState>) -> Json<CommandOutcome<LoadedData>> {
    let commands = Commands::new(state.store, state.config.forecast);
    Json(commands.load().await)
}

/// List observations, optionally for one region
///
/// An unknown region tag matches nothing.
pub async fn list_observations(
    State(state): State<AppState>,
    Query(query): Query<RegionQuery>,
) -> AppResult<Json<Vec<Observation>>> {
    let observations = match query.region {
        None => state.store.observations.get_all().await?,
        Some(tag) => match Region::from_tag(&tag) {
            Some(region) => {
                RegionalService::new(state.store, state.config.forecast)
                    .observations_for_region(region)
                    .await?
            }
            None => Vec::new(),
        },
    };
    Ok(Json(observations))
}

/// Normalize and store a new observation
pub async fn add_observation(
    State(state): State<AppState>,
    Json(input): Json<ObservationInput>,
) -> Json<CommandOutcome<Observation>> {
    let commands = Commands::new(state.store, state.config.forecast);
    Json(commands.add_observation(input).await)
}

/// Replace a stored observation
pub async fn update_observation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(mut observation): Json<Observation>,
) -> Json<CommandOutcome<Observation>> {
    observation.id = id;
    let commands = Commands::new(state.store, state.config.forecast);
    Json(commands.update_observation(observation).await)
}

/// Delete a stored observation
pub async fn delete_observation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Json<CommandOutcome<()>> {
    let commands = Commands::new(state.store, state.config.forecast);
    Json(commands.delete_observation(id).await)
}
