//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// The eight compass labels accepted as wind directions
pub const WIND_DIRECTIONS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Month names used by climate records
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weather condition labels offered to data entry
pub const WEATHER_CONDITIONS: [&str; 15] = [
    "Clear",
    "Variable cloudiness",
    "Cloudy",
    "Overcast",
    "Rain",
    "Heavy rain",
    "Downpour",
    "Snow",
    "Heavy snow",
    "Blizzard",
    "Fog",
    "Thunderstorm",
    "Hail",
    "Black ice",
    "Dust storm",
];

/// Wind direction used when a sample has no readings
pub const UNKNOWN_DIRECTION: &str = "Unknown";

/// Condition used for fallback forecasts and empty samples
pub const DEFAULT_CONDITION: &str = "Variable cloudiness";

/// Wind direction used for fallback forecasts
pub const DEFAULT_DIRECTION: &str = "NW";

/// Result of a user-facing command: a status line plus an optional payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandOutcome<T> {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> CommandOutcome<T> {
    pub fn ok(status: impl Into<String>, data: T) -> Self {
        Self {
            status: status.into(),
            data: Some(data),
        }
    }

    /// A status without payload, used for rejected input and failures
    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            data: None,
        }
    }
}
