//! User-facing commands that report a status line instead of failing
//!
//! Each command wraps one or more service calls. Rejected input and storage
//! failures both end up in [`CommandOutcome::status`]; nothing here returns
//! an error to its caller.

use serde::Serialize;
use shared::{
    validate_observation, CommandOutcome, Forecast, Observation, ObservationInput, RegionalAnalysis,
};

use crate::config::ForecastConfig;
use crate::error::{AppError, AppResult};
use crate::services::{AccuracyService, RegionalService};
use crate::store::DataStore;

pub const MISSING_FIELDS: &str = "Please fill in all required fields";
pub const SELECT_TO_UPDATE: &str = "Please select a record to update";
pub const SELECT_TO_DELETE: &str = "Please select a record to delete";
pub const SELECT_TO_EVALUATE: &str = "Please select a forecast to evaluate";
pub const SELECT_FORECAST_TO_UPDATE: &str = "Please select a forecast to update";

/// Everything shown on the main screen after a load
#[derive(Debug, Clone, Serialize)]
pub struct LoadedData {
    pub observations: Vec<Observation>,
    pub forecasts: Vec<Forecast>,
}

/// Command layer over the services
#[derive(Clone)]
pub struct Commands {
    store: DataStore,
    settings: ForecastConfig,
    regional: RegionalService,
    accuracy: AccuracyService,
}

impl Commands {
    pub fn new(store: DataStore, settings: ForecastConfig) -> Self {
        Self {
            regional: RegionalService::new(store.clone(), settings),
            accuracy: AccuracyService::new(store.clone()),
            store,
            settings,
        }
    }

    pub async fn load(&self) -> CommandOutcome<LoadedData> {
        match self.read_everything().await {
            Ok(data) => {
                let status = format!(
                    "Loaded {} observations and {} forecasts",
                    data.observations.len(),
                    data.forecasts.len()
                );
                tracing::info!("{}", status);
                CommandOutcome::ok(status, data)
            }
            Err(e) => failed("Load", e),
        }
    }

    pub async fn add_observation(&self, input: ObservationInput) -> CommandOutcome<Observation> {
        if input.observation.location.trim().is_empty() || input.region.trim().is_empty() {
            return CommandOutcome::status(MISSING_FIELDS);
        }
        if let Err(msg) = validate_observation(&input.observation) {
            return CommandOutcome::status(msg);
        }

        match self
            .regional
            .process_by_tag(input.observation, &input.region)
            .await
        {
            Ok(stored) => CommandOutcome::ok("Observation added", stored),
            Err(e) => failed("Add observation", e),
        }
    }

    /// Replace a stored observation; an id nobody owns leaves the store untouched
    pub async fn update_observation(&self, observation: Observation) -> CommandOutcome<Observation> {
        if observation.id == 0 {
            return CommandOutcome::status(SELECT_TO_UPDATE);
        }
        if let Err(msg) = validate_observation(&observation) {
            return CommandOutcome::status(msg);
        }

        match self.store.observations.update_by_id(observation.clone()).await {
            Ok(true) => {
                tracing::info!("Updated observation {}", observation.id);
                CommandOutcome::ok("Observation updated", observation)
            }
            Ok(false) => CommandOutcome::status(format!("Observation {} not found", observation.id)),
            Err(e) => failed("Update observation", e),
        }
    }

    pub async fn delete_observation(&self, id: i64) -> CommandOutcome<()> {
        if id == 0 {
            return CommandOutcome::status(SELECT_TO_DELETE);
        }

        match self.store.observations.remove_by_id(id).await {
            Ok(true) => {
                tracing::info!("Deleted observation {}", id);
                CommandOutcome::status("Observation deleted")
            }
            Ok(false) => CommandOutcome::status(format!("Observation {} not found", id)),
            Err(e) => failed("Delete observation", e),
        }
    }

    /// Forecast every region and append the results to the forecast store
    pub async fn generate_forecasts(&self, days_ahead: Option<u32>) -> CommandOutcome<Vec<Forecast>> {
        let days_ahead = days_ahead.unwrap_or(self.settings.days_ahead);
        match self.store_forecasts(days_ahead).await {
            Ok(stored) => {
                let status = format!("Generated {} forecasts", stored.len());
                tracing::info!("{}", status);
                CommandOutcome::ok(status, stored)
            }
            Err(e) => failed("Forecast generation", e),
        }
    }

    /// Replace a stored forecast and mark it as edited
    pub async fn update_forecast(&self, mut forecast: Forecast) -> CommandOutcome<Forecast> {
        if forecast.id == 0 {
            return CommandOutcome::status(SELECT_FORECAST_TO_UPDATE);
        }
        forecast.set_confidence(forecast.confidence);
        forecast.is_updated = true;

        match self.store.forecasts.update_by_id(forecast.clone()).await {
            Ok(true) => {
                tracing::info!("Updated forecast {}", forecast.id);
                CommandOutcome::ok("Forecast updated", forecast)
            }
            Ok(false) => CommandOutcome::status(format!("Forecast {} not found", forecast.id)),
            Err(e) => failed("Update forecast", e),
        }
    }

    pub async fn analyze_regions(&self) -> CommandOutcome<Vec<RegionalAnalysis>> {
        match self.regional.analyze_all().await {
            Ok(analyses) => {
                let status = format!("Analyzed {} regions", analyses.len());
                tracing::info!("{}", status);
                CommandOutcome::ok(status, analyses)
            }
            Err(e) => failed("Analysis", e),
        }
    }

    pub async fn evaluate_forecast(&self, forecast_id: i64) -> CommandOutcome<f64> {
        if forecast_id == 0 {
            return CommandOutcome::status(SELECT_TO_EVALUATE);
        }

        match self.accuracy.evaluate(forecast_id).await {
            Ok(accuracy) => CommandOutcome::ok(format!("Forecast accuracy: {:.1}%", accuracy), accuracy),
            Err(e) => failed("Accuracy evaluation", e),
        }
    }

    pub async fn clear_forecasts(&self) -> CommandOutcome<()> {
        match self.store.forecasts.replace_all(&[]).await {
            Ok(()) => {
                tracing::info!("Cleared all forecasts");
                CommandOutcome::status("All forecasts cleared")
            }
            Err(e) => failed("Clearing forecasts", e),
        }
    }

    async fn read_everything(&self) -> AppResult<LoadedData> {
        Ok(LoadedData {
            observations: self.store.observations.get_all().await?,
            forecasts: self.store.forecasts.get_all().await?,
        })
    }

    async fn store_forecasts(&self, days_ahead: u32) -> AppResult<Vec<Forecast>> {
        let generated: Vec<Forecast> = self
            .regional
            .forecast_all(days_ahead)
            .await?
            .into_iter()
            .flat_map(|(_, forecasts)| forecasts)
            .collect();
        self.store.forecasts.append_many(generated).await
    }
}

fn failed<T>(action: &str, error: AppError) -> CommandOutcome<T> {
    tracing::error!("{} failed: {:?}", action, error);
    CommandOutcome::status(format!("{} failed: {}", action, error))
}
