//! Scores a stored forecast against the actual observation for its day

use shared::{Forecast, Observation};

use crate::error::AppResult;
use crate::store::DataStore;

/// Forecast accuracy evaluation
#[derive(Clone)]
pub struct AccuracyService {
    store: DataStore,
}

impl AccuracyService {
    pub fn new(store: DataStore) -> Self {
        Self { store }
    }

    /// Accuracy in percent (0-100); 0 when the forecast or its actual is missing
    pub async fn evaluate(&self, forecast_id: i64) -> AppResult<f64> {
        let Some(forecast) = self.store.forecasts.get_by_id(forecast_id).await? else {
            tracing::debug!("Forecast {} not found, accuracy 0", forecast_id);
            return Ok(0.0);
        };

        let observations = self.store.observations.get_all().await?;
        let accuracy = Self::find_actual(&forecast, &observations)
            .map(|actual| Self::score(&forecast, actual))
            .unwrap_or(0.0);

        tracing::info!("Forecast {} accuracy {:.1}%", forecast_id, accuracy);
        Ok(accuracy)
    }

    /// First actual reading on the forecast's target day at the same location
    pub fn find_actual<'a>(forecast: &Forecast, observations: &'a [Observation]) -> Option<&'a Observation> {
        let target_day = forecast.forecast_date.date_naive();
        observations.iter().find(|o| {
            o.is_actual && o.date.date_naive() == target_day && o.location == forecast.location
        })
    }

    /// `max(0, 100 - mean absolute error)` over temperature, humidity and pressure
    pub fn score(forecast: &Forecast, actual: &Observation) -> f64 {
        let temperature_error = (forecast.predicted_temperature - actual.temperature).abs();
        let humidity_error = (forecast.predicted_humidity - actual.humidity).abs();
        let pressure_error = (forecast.predicted_pressure - actual.pressure).abs();

        let average_error = (temperature_error + humidity_error + pressure_error) / 3.0;
        (100.0 - average_error).max(0.0)
    }
}
