//! Route definitions for the regional weather analytics API

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Full snapshot for the main screen
        .route("/load", get(handlers::load_all))
        .nest("/observations", observation_routes())
        .nest("/forecasts", forecast_routes())
        .nest("/analysis", analysis_routes())
        .nest("/regions", region_routes())
        .route(
            "/climate",
            get(handlers::get_climate)
                .post(handlers::add_climate_record)
                .put(handlers::replace_climate),
        )
        .route(
            "/soundings",
            get(handlers::list_soundings).post(handlers::add_sounding),
        )
}

/// Observation management routes
fn observation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_observations).post(handlers::add_observation),
        )
        .route(
            "/:id",
            put(handlers::update_observation).delete(handlers::delete_observation),
        )
}

/// Forecast routes
fn forecast_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_forecasts).delete(handlers::clear_forecasts),
        )
        .route("/generate", post(handlers::generate_forecasts))
        .route("/:id", put(handlers::update_forecast))
        .route("/:id/accuracy", get(handlers::evaluate_forecast))
}

/// Analysis routes
fn analysis_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::analyze_regions))
        .route("/:region", get(handlers::get_region_analysis))
}

/// Region catalog routes
fn region_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_regions))
        .route(
            "/characteristics",
            get(handlers::list_region_characteristics).put(handlers::replace_region_characteristics),
        )
        .route("/:region", get(handlers::get_region))
        .route("/:region/forecast", get(handlers::preview_region_forecast))
}
