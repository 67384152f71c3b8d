//! Static catalog of human-readable region descriptions

use shared::{Region, RegionInfo};

/// Fixed descriptions of the three regions
#[derive(Debug, Clone)]
pub struct RegionCatalog {
    regions: Vec<RegionInfo>,
}

impl Default for RegionCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionCatalog {
    pub fn new() -> Self {
        Self {
            regions: Region::ALL.into_iter().map(describe).collect(),
        }
    }

    /// All three entries, in region order
    pub fn all(&self) -> Vec<RegionInfo> {
        self.regions.clone()
    }

    pub fn get(&self, region: Region) -> RegionInfo {
        self.regions
            .iter()
            .find(|info| info.region == Some(region))
            .cloned()
            .unwrap_or_default()
    }

    /// Entry for a region tag; unknown tags get an empty entry
    pub fn get_by_tag(&self, tag: &str) -> RegionInfo {
        Region::from_tag(tag)
            .map(|region| self.get(region))
            .unwrap_or_default()
    }

    pub fn name(&self, region: Region) -> String {
        self.get(region).name
    }

    pub fn description(&self, region: Region) -> String {
        self.get(region).description
    }
}

fn describe(region: Region) -> RegionInfo {
    let (name, description, characteristics, typical_weather, recommendations) = match region {
        Region::Middle => (
            "Middle region",
            "Temperate climate with pronounced seasonal change",
            "- Altitude: 0-500 m above sea level\n\
             - Temperature range: 25°C\n\
             - Humidity: 30-80%\n\
             - Pressure: 980-1030 hPa\n\
             - Stable weather conditions",
            "- Clear weather\n\
             - Variable cloudiness\n\
             - Moderate precipitation\n\
             - Light to moderate wind",
            "- Suitable for all activities\n\
             - Standard precautions\n\
             - Account for seasonal change",
        ),
        Region::Lower => (
            "Lower region",
            "Coastal climate with high humidity and frequent precipitation",
            "- Altitude: 0-200 m above sea level\n\
             - Temperature range: 20°C\n\
             - Humidity: 40-90%\n\
             - Pressure: 990-1040 hPa\n\
             - Maritime influence",
            "- Cloudy weather\n\
             - Frequent fog\n\
             - Heavy precipitation\n\
             - Strong onshore wind",
            "- Take care in fog\n\
             - Protect against high humidity\n\
             - Expect sea breezes\n\
             - Prepare for frequent precipitation",
        ),
        Region::Upper => (
            "Upper region",
            "Mountain climate with low pressure and strong wind",
            "- Altitude: 500-2000 m above sea level\n\
             - Temperature range: 30°C\n\
             - Humidity: 20-70%\n\
             - Pressure: 950-1020 hPa\n\
             - Sharp temperature swings",
            "- Clear weather\n\
             - Variable cloudiness\n\
             - Snow and blizzards\n\
             - Strong gusty wind",
            "- Take care in strong wind\n\
             - Guard against pressure swings\n\
             - Prepare for abrupt weather change\n\
             - Account for the mountain climate",
        ),
    };

    RegionInfo {
        region: Some(region),
        name: name.to_string(),
        description: description.to_string(),
        characteristics: characteristics.to_string(),
        typical_weather: typical_weather.to_string(),
        recommendations: recommendations.to_string(),
    }
}
