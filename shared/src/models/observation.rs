//! Weather observation models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded or submitted weather reading tagged to a region
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Observation {
    /// Assigned by the store on insert
    pub id: i64,
    pub date: DateTime<Utc>,
    pub location: String,
    /// Degrees Celsius
    pub temperature: f64,
    /// Relative humidity, percent
    pub humidity: f64,
    /// Hectopascal
    pub pressure: f64,
    pub wind_speed: f64,
    /// Compass label, e.g. "NW"
    pub wind_direction: String,
    pub precipitation: f64,
    pub weather_condition: String,
    pub visibility: f64,
    pub cloud_cover: f64,
    /// True when this is an actual recorded reading rather than a planning entry
    pub is_actual: bool,
    /// Canonical region tag, set by the normalizer
    pub region: String,
}

/// Input for submitting a new observation
#[derive(Debug, Clone, Deserialize)]
pub struct ObservationInput {
    pub region: String,
    #[serde(flatten)]
    pub observation: Observation,
}
