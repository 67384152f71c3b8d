//! Validation utilities for submitted weather records

use crate::models::{Observation, UpperAirSounding};
use crate::types::{MONTHS, WEATHER_CONDITIONS, WIND_DIRECTIONS};

/// Longest forecast horizon accepted, in days
pub const MAX_DAYS_AHEAD: u32 = 30;

// ============================================================================
// Observation Validations
// ============================================================================

/// Validate a raw observation before it is normalized and stored
pub fn validate_observation(observation: &Observation) -> Result<(), &'static str> {
    validate_location(&observation.location)?;
    validate_percent(observation.humidity).map_err(|_| "Humidity must be between 0 and 100%")?;
    validate_percent(observation.cloud_cover)
        .map_err(|_| "Cloud cover must be between 0 and 100%")?;
    validate_pressure(observation.pressure)?;
    if !(observation.wind_speed >= 0.0) {
        return Err("Wind speed cannot be negative");
    }
    if !(observation.precipitation >= 0.0) {
        return Err("Precipitation cannot be negative");
    }
    if !(observation.visibility >= 0.0) {
        return Err("Visibility cannot be negative");
    }
    validate_wind_direction(&observation.wind_direction)?;
    validate_weather_condition(&observation.weather_condition)?;
    Ok(())
}

/// Validate an upper-air sounding level
pub fn validate_sounding(sounding: &UpperAirSounding) -> Result<(), &'static str> {
    validate_location(&sounding.location)?;
    validate_percent(sounding.humidity).map_err(|_| "Humidity must be between 0 and 100%")?;
    validate_pressure(sounding.pressure)?;
    if !(sounding.altitude >= 0.0) {
        return Err("Altitude cannot be negative");
    }
    validate_wind_direction(&sounding.wind_direction)?;
    Ok(())
}

/// Location must be present
pub fn validate_location(location: &str) -> Result<(), &'static str> {
    if location.trim().is_empty() {
        return Err("Location is required");
    }
    Ok(())
}

/// Validate a percentage in 0..=100
pub fn validate_percent(value: f64) -> Result<(), &'static str> {
    if !(0.0..=100.0).contains(&value) {
        return Err("Value must be between 0 and 100");
    }
    Ok(())
}

/// Pressure must be a positive number of hectopascal
pub fn validate_pressure(pressure: f64) -> Result<(), &'static str> {
    if !(pressure > 0.0) {
        return Err("Pressure must be positive");
    }
    Ok(())
}

/// Wind direction must be one of the eight compass labels
pub fn validate_wind_direction(direction: &str) -> Result<(), &'static str> {
    if WIND_DIRECTIONS.contains(&direction) {
        Ok(())
    } else {
        Err("Wind direction must be one of N, NE, E, SE, S, SW, W, NW")
    }
}

/// Weather condition is optional; when given it must be a known label
pub fn validate_weather_condition(condition: &str) -> Result<(), &'static str> {
    if condition.is_empty() || WEATHER_CONDITIONS.contains(&condition) {
        Ok(())
    } else {
        Err("Unknown weather condition")
    }
}

// ============================================================================
// Request Parameter Validations
// ============================================================================

/// Forecast horizon must be between 1 and MAX_DAYS_AHEAD days
pub fn validate_days_ahead(days: u32) -> Result<(), &'static str> {
    if days == 0 {
        return Err("Forecast must cover at least one day");
    }
    if days > MAX_DAYS_AHEAD {
        return Err("Forecast cannot cover more than 30 days");
    }
    Ok(())
}

/// Month must be an English month name
pub fn validate_month(month: &str) -> Result<(), &'static str> {
    if MONTHS.contains(&month) {
        Ok(())
    } else {
        Err("Unknown month name")
    }
}
