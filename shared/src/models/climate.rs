//! Climate normals, upper-air soundings and region characteristics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::region::Region;

/// Monthly climate averages for a location
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClimateRecord {
    pub id: i64,
    pub location: String,
    /// English month name, e.g. "January"
    pub month: String,
    pub average_temperature: f64,
    pub average_humidity: f64,
    pub average_precipitation: f64,
    pub average_wind_speed: f64,
    pub region: String,
}

/// A single level of an upper-air (aerological) sounding
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpperAirSounding {
    pub id: i64,
    pub date: DateTime<Utc>,
    pub location: String,
    /// Meters above sea level
    pub altitude: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub wind_speed: f64,
    pub wind_direction: String,
    pub region: String,
}

/// Physical characteristics of a region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionCharacteristics {
    pub region: Region,
    pub name: String,
    pub description: String,
    pub min_altitude: f64,
    pub max_altitude: f64,
    pub typical_temperature_range: f64,
    pub typical_humidity_range: f64,
    #[serde(default)]
    pub typical_weather_conditions: Vec<String>,
}
