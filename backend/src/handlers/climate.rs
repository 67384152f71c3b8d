//! HTTP handlers for climate normals and upper-air soundings

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared::{ClimateRecord, Region, UpperAirSounding};

use crate::error::AppResult;
use crate::handlers::RegionQuery;
use crate::services::RegionalService;
use crate::AppState;

/// Query parameters for a climate lookup
#[derive(Debug, Deserialize)]
pub struct ClimateQuery {
    pub region: String,
    pub month: String,
}

/// Climate normals for a region and month, or null when none are stored
pub async fn get_climate(
    State(state): State<AppState>,
    Query(query): Query<ClimateQuery>,
) -> AppResult<Json<Option<ClimateRecord>>> {
    let Some(region) = Region::from_tag(&query.region) else {
        return Ok(Json(None));
    };
    let service = RegionalService::new(state.store, state.config.forecast);
    Ok(Json(service.climate_characteristics(region, &query.month).await?))
}

/// Replace all stored climate records
pub async fn replace_climate(
    State(state): State<AppState>,
    Json(records): Json<Vec<ClimateRecord>>,
) -> AppResult<Json<Vec<ClimateRecord>>> {
    let service = RegionalService::new(state.store, state.config.forecast);
    Ok(Json(service.save_climate(records).await?))
}

pub async fn add_climate_record(
    State(state): State<AppState>,
    Json(record): Json<ClimateRecord>,
) -> AppResult<Json<ClimateRecord>> {
    let service = RegionalService::new(state.store, state.config.forecast);
    Ok(Json(service.add_climate_record(record).await?))
}

pub async fn list_soundings(
    State(state): State<AppState>,
    Query(query): Query<RegionQuery>,
) -> AppResult<Json<Vec<UpperAirSounding>>> {
    let service = RegionalService::new(state.store, state.config.forecast);
    let soundings = match query.region {
        None => service.soundings(None).await?,
        Some(tag) => match Region::from_tag(&tag) {
            Some(region) => service.soundings(Some(region)).await?,
            None => Vec::new(),
        },
    };
    Ok(Json(soundings))
}

pub async fn add_sounding(
    State(state): State<AppState>,
    Json(sounding): Json<UpperAirSounding>,
) -> AppResult<Json<UpperAirSounding>> {
    let service = RegionalService::new(state.store, state.config.forecast);
    Ok(Json(service.record_sounding(sounding).await?))
}
