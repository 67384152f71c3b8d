//! Regional analysis results

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard deviation below which forecasts are considered highly reliable
pub const HIGH_RELIABILITY_MAX_STD_DEV: f64 = 5.0;
/// Standard deviation at and above which forecasts are considered unreliable
pub const LOW_RELIABILITY_MIN_STD_DEV: f64 = 15.0;
/// Pressure (hPa) separating cyclonic from anticyclonic conditions
pub const PATTERN_PRESSURE_PIVOT: f64 = 1013.0;

/// Broad weather regime derived from mean pressure and humidity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherPattern {
    #[default]
    InsufficientData,
    Anticyclone,
    Cyclone,
    Variable,
}

impl WeatherPattern {
    /// Classify from mean values; comparisons are strict on both thresholds
    pub fn classify(mean_pressure: f64, mean_humidity: f64) -> WeatherPattern {
        if mean_pressure > PATTERN_PRESSURE_PIVOT && mean_humidity < 60.0 {
            WeatherPattern::Anticyclone
        } else if mean_pressure < PATTERN_PRESSURE_PIVOT && mean_humidity > 70.0 {
            WeatherPattern::Cyclone
        } else {
            WeatherPattern::Variable
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherPattern::InsufficientData => "Insufficient data for analysis",
            WeatherPattern::Anticyclone => "Anticyclone - clear weather",
            WeatherPattern::Cyclone => "Cyclone - overcast with precipitation",
            WeatherPattern::Variable => "Variable weather",
        }
    }
}

impl fmt::Display for WeatherPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Forecast reliability derived from temperature spread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reliability {
    High,
    Medium,
    Low,
}

impl Reliability {
    pub fn from_std_dev(std_dev: f64) -> Reliability {
        if std_dev < HIGH_RELIABILITY_MAX_STD_DEV {
            Reliability::High
        } else if std_dev < LOW_RELIABILITY_MIN_STD_DEV {
            Reliability::Medium
        } else {
            Reliability::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Reliability::High => "High",
            Reliability::Medium => "Medium",
            Reliability::Low => "Low",
        }
    }
}

impl fmt::Display for Reliability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Aggregate summary of a region's stored history
///
/// Built fresh on every request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegionalAnalysis {
    /// Canonical region tag
    pub region: String,
    pub analysis_date: DateTime<Utc>,
    pub average_temperature: f64,
    pub average_humidity: f64,
    pub average_pressure: f64,
    pub average_wind_speed: f64,
    pub dominant_wind_direction: String,
    pub weather_pattern: WeatherPattern,
    /// Absent when there was nothing to analyze
    pub forecast_reliability: Option<Reliability>,
    pub recommendations: Vec<String>,
}

impl RegionalAnalysis {
    /// Analysis of a region with no stored observations
    pub fn insufficient(region: impl Into<String>, analysis_date: DateTime<Utc>) -> Self {
        Self {
            region: region.into(),
            analysis_date,
            weather_pattern: WeatherPattern::InsufficientData,
            ..Default::default()
        }
    }
}
