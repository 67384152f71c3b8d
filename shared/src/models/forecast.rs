//! Forecast models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lowest and highest confidence a forecast may carry
pub const CONFIDENCE_RANGE: (f64, f64) = (0.0, 100.0);

/// A generated prediction for a future date
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Forecast {
    pub id: i64,
    /// The day being predicted
    pub forecast_date: DateTime<Utc>,
    pub created_date: DateTime<Utc>,
    pub location: String,
    pub predicted_temperature: f64,
    pub predicted_humidity: f64,
    pub predicted_pressure: f64,
    pub predicted_wind_speed: f64,
    pub predicted_wind_direction: String,
    pub predicted_precipitation: f64,
    pub predicted_weather_condition: String,
    /// Always within [`CONFIDENCE_RANGE`]
    pub confidence: f64,
    pub region: String,
    pub is_updated: bool,
}

impl Forecast {
    /// Set the confidence, clamped into [`CONFIDENCE_RANGE`]
    pub fn set_confidence(&mut self, confidence: f64) {
        self.confidence = clamp_confidence(confidence);
    }
}

/// Clamp a raw confidence score; NaN collapses to zero
pub fn clamp_confidence(confidence: f64) -> f64 {
    if confidence.is_nan() {
        return CONFIDENCE_RANGE.0;
    }
    confidence.clamp(CONFIDENCE_RANGE.0, CONFIDENCE_RANGE.1)
}
