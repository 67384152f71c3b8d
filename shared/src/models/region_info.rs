//! Descriptive region catalog entries

use serde::{Deserialize, Serialize};

use super::region::Region;

/// Human-readable description of a region
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegionInfo {
    /// `None` only for the empty entry returned for unknown regions
    pub region: Option<Region>,
    pub name: String,
    pub description: String,
    pub characteristics: String,
    pub typical_weather: String,
    pub recommendations: String,
}
