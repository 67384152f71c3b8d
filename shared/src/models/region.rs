//! Region identifiers and the per-region rule table
//!
//! Every region-specific constant (normalization offsets and clamps, the
//! fallback forecast profile, the advisory note) lives in one table indexed
//! by [`Region`], so no other module branches on the region.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::observation::Observation;

/// One of the three fixed geographic/altitude classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    Middle,
    Lower,
    Upper,
}

/// Returned when a region identifier is not one of the three known tags
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown region: {0}")]
pub struct UnknownRegion(pub String);

impl Region {
    /// All regions in the order used by every "all regions" operation
    pub const ALL: [Region; 3] = [Region::Middle, Region::Lower, Region::Upper];

    /// Canonical tag stored on observations and forecasts
    pub fn as_str(&self) -> &'static str {
        self.spec().tag
    }

    /// Resolve a stored region tag; unknown tags yield `None`
    pub fn from_tag(tag: &str) -> Option<Region> {
        Region::from_str(tag).ok()
    }

    /// Correction rules applied to incoming observations
    pub fn rule(&self) -> &'static NormalizationRule {
        &self.spec().rule
    }

    /// Fallback profile used when the region has no history
    pub fn default_profile(&self) -> &'static DefaultProfile {
        &self.spec().profile
    }

    /// Fixed advisory appended to every analysis of this region
    pub fn advisory_note(&self) -> &'static str {
        self.spec().note
    }

    fn spec(&self) -> &'static RegionSpec {
        match self {
            Region::Middle => &REGION_TABLE[0],
            Region::Lower => &REGION_TABLE[1],
            Region::Upper => &REGION_TABLE[2],
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("mid") {
            return Ok(Region::Middle);
        }
        Region::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

/// Offset-then-clamp corrections for a region's raw readings
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizationRule {
    pub temperature_offset: f64,
    pub humidity_offset: f64,
    pub humidity_range: (f64, f64),
    pub pressure_offset: f64,
    pub pressure_range: (f64, f64),
    /// Lower bound for visibility, if the region enforces one
    pub min_visibility: Option<f64>,
    /// Multiplier for wind speed, if the region applies one
    pub wind_speed_factor: Option<f64>,
}

impl NormalizationRule {
    /// Apply the corrections in place
    pub fn apply(&self, observation: &mut Observation) {
        observation.temperature += self.temperature_offset;

        let (h_min, h_max) = self.humidity_range;
        observation.humidity = (observation.humidity + self.humidity_offset).clamp(h_min, h_max);

        let (p_min, p_max) = self.pressure_range;
        observation.pressure = (observation.pressure + self.pressure_offset).clamp(p_min, p_max);

        if let Some(min) = self.min_visibility {
            observation.visibility = observation.visibility.max(min);
        }
        if let Some(factor) = self.wind_speed_factor {
            observation.wind_speed *= factor;
        }
    }
}

/// Static forecast values for a region without recorded history
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultProfile {
    pub location: &'static str,
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub wind_speed: f64,
}

struct RegionSpec {
    tag: &'static str,
    rule: NormalizationRule,
    profile: DefaultProfile,
    note: &'static str,
}

static REGION_TABLE: [RegionSpec; 3] = [
    RegionSpec {
        tag: "Middle",
        rule: NormalizationRule {
            temperature_offset: 0.0,
            humidity_offset: 0.0,
            humidity_range: (30.0, 80.0),
            pressure_offset: 0.0,
            pressure_range: (980.0, 1030.0),
            min_visibility: None,
            wind_speed_factor: None,
        },
        profile: DefaultProfile {
            location: "Moscow",
            temperature: -5.0,
            humidity: 70.0,
            pressure: 1013.0,
            wind_speed: 3.5,
        },
        note: "Middle region: standard weather conditions",
    },
    RegionSpec {
        tag: "Lower",
        rule: NormalizationRule {
            temperature_offset: 2.0,
            humidity_offset: 5.0,
            humidity_range: (40.0, 90.0),
            pressure_offset: 10.0,
            pressure_range: (990.0, 1040.0),
            min_visibility: Some(1.0),
            wind_speed_factor: None,
        },
        profile: DefaultProfile {
            location: "Saint Petersburg",
            temperature: -2.0,
            humidity: 85.0,
            pressure: 1018.0,
            wind_speed: 4.2,
        },
        note: "Lower region: fog and elevated humidity are likely",
    },
    RegionSpec {
        tag: "Upper",
        rule: NormalizationRule {
            temperature_offset: -5.0,
            humidity_offset: -10.0,
            humidity_range: (20.0, 70.0),
            pressure_offset: -20.0,
            pressure_range: (950.0, 1020.0),
            min_visibility: None,
            wind_speed_factor: Some(1.2),
        },
        profile: DefaultProfile {
            location: "Yekaterinburg",
            temperature: -12.0,
            humidity: 60.0,
            pressure: 995.0,
            wind_speed: 6.8,
        },
        note: "Upper region: account for the mountain climate and sudden pressure changes",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(temperature: f64, humidity: f64, pressure: f64) -> Observation {
        Observation {
            temperature,
            humidity,
            pressure,
            wind_speed: 10.0,
            visibility: 0.2,
            ..Default::default()
        }
    }

    #[test]
    fn test_region_tags_round_trip() {
        for region in Region::ALL {
            assert_eq!(region.as_str().parse::<Region>(), Ok(region));
            assert_eq!(region.to_string(), region.as_str());
        }
    }

    #[test]
    fn test_region_parse_aliases() {
        assert_eq!("mid".parse::<Region>(), Ok(Region::Middle));
        assert_eq!(" upper ".parse::<Region>(), Ok(Region::Upper));
        assert_eq!("LOWER".parse::<Region>(), Ok(Region::Lower));
    }

    #[test]
    fn test_region_parse_unknown() {
        assert_eq!(
            "Coastal".parse::<Region>(),
            Err(UnknownRegion("Coastal".to_string()))
        );
        assert_eq!(Region::from_tag(""), None);
    }

    #[test]
    fn test_middle_rule() {
        let mut obs = raw(12.0, 25.0, 1040.0);
        Region::Middle.rule().apply(&mut obs);
        assert_eq!(obs.temperature, 12.0);
        assert_eq!(obs.humidity, 30.0);
        assert_eq!(obs.pressure, 1030.0);
        assert_eq!(obs.visibility, 0.2);
        assert_eq!(obs.wind_speed, 10.0);
    }

    #[test]
    fn test_lower_rule() {
        let mut obs = raw(12.0, 88.0, 1000.0);
        Region::Lower.rule().apply(&mut obs);
        assert_eq!(obs.temperature, 14.0);
        assert_eq!(obs.humidity, 90.0);
        assert_eq!(obs.pressure, 1010.0);
        assert_eq!(obs.visibility, 1.0);
        assert_eq!(obs.wind_speed, 10.0);
    }

    #[test]
    fn test_upper_rule() {
        let mut obs = raw(12.0, 50.0, 960.0);
        Region::Upper.rule().apply(&mut obs);
        assert_eq!(obs.temperature, 7.0);
        assert_eq!(obs.humidity, 40.0);
        assert_eq!(obs.pressure, 950.0);
        assert_eq!(obs.wind_speed, 12.0);
    }

    #[test]
    fn test_clamp_edges_are_idempotent() {
        let mut obs = raw(0.0, 30.0, 980.0);
        Region::Middle.rule().apply(&mut obs);
        assert_eq!(obs.humidity, 30.0);
        assert_eq!(obs.pressure, 980.0);
        Region::Middle.rule().apply(&mut obs);
        assert_eq!(obs.humidity, 30.0);
        assert_eq!(obs.pressure, 980.0);
    }

    #[test]
    fn test_profiles_and_notes_are_distinct() {
        let locations: Vec<_> = Region::ALL.iter().map(|r| r.default_profile().location).collect();
        assert_eq!(locations, vec!["Moscow", "Saint Petersburg", "Yekaterinburg"]);

        let notes: Vec<_> = Region::ALL.iter().map(|r| r.advisory_note()).collect();
        assert_ne!(notes[0], notes[1]);
        assert_ne!(notes[1], notes[2]);
        assert_ne!(notes[0], notes[2]);
    }
}
