//! HTTP handlers for regional analysis

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use shared::{CommandOutcome, Region, RegionalAnalysis};

use crate::error::AppResult;
use crate::services::{AnalyticsService, Commands};
use crate::AppState;

/// Analyze all three regions
pub async fn analyze_regions(State(state): State<AppState>) -> Json<CommandOutcome<Vec<RegionalAnalysis>>> {
    let commands = Commands::new(state.store, state.config.forecast);
    Json(commands.analyze_regions().await)
}

/// Analyze one region; an unknown tag reports insufficient data
pub async fn get_region_analysis(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> AppResult<Json<RegionalAnalysis>> {
    let analysis = match Region::from_tag(&tag) {
        Some(region) => AnalyticsService::new(state.store).analyze_region(region).await?,
        None => RegionalAnalysis::insufficient(tag, Utc::now()),
    };
    Ok(Json(analysis))
}
