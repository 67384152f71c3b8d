//! HTTP handlers for the region catalog and region characteristics

use axum::{
    extract::{Path, State},
    Json,
};
use shared::{RegionCharacteristics, RegionInfo};

use crate::error::AppResult;
use crate::services::{RegionCatalog, RegionalService};
use crate::AppState;

pub async fn list_regions() -> Json<Vec<RegionInfo>> {
    Json(RegionCatalog::new().all())
}

/// Catalog entry for a tag; unknown tags get an empty entry
pub async fn get_region(Path(tag): Path<String>) -> Json<RegionInfo> {
    Json(RegionCatalog::new().get_by_tag(&tag))
}

pub async fn list_region_characteristics(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<RegionCharacteristics>>> {
    let service = RegionalService::new(state.store, state.config.forecast);
    Ok(Json(service.region_characteristics().await?))
}

/// Replace the stored region characteristics
pub async fn replace_region_characteristics(
    State(state): State<AppState>,
    Json(characteristics): Json<Vec<RegionCharacteristics>>,
) -> AppResult<Json<Vec<RegionCharacteristics>>> {
    let service = RegionalService::new(state.store, state.config.forecast);
    service.save_region_characteristics(&characteristics).await?;
    Ok(Json(characteristics))
}
