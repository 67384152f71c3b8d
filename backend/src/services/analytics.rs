//! Regional analytics: averages, dominant wind, pattern and reliability

use chrono::{DateTime, Utc};
use shared::statistics::{dominant_label, mean, population_std_dev};
use shared::{Observation, Region, RegionalAnalysis, Reliability, WeatherPattern, UNKNOWN_DIRECTION};

use crate::error::AppResult;
use crate::store::DataStore;

pub const ICE_WARNING: &str = "Caution: black ice and icing are possible";
pub const HEAT_WARNING: &str = "High temperature: avoid prolonged exposure to the sun";
pub const HUMIDITY_NOTE: &str = "High humidity may affect well-being";
pub const WIND_CAUTION: &str = "Strong wind: take care when moving about";

/// Analytics service over the stored observation history
#[derive(Clone)]
pub struct AnalyticsService {
    store: DataStore,
}

impl AnalyticsService {
    pub fn new(store: DataStore) -> Self {
        Self { store }
    }

    /// Analyze everything currently stored for `region`
    pub async fn analyze_region(&self, region: Region) -> AppResult<RegionalAnalysis> {
        let observations = self.store.observations.get_all().await?;
        Ok(Self::analyze(region, &observations, Utc::now()))
    }

    /// Analyze the observations tagged with `region`
    ///
    /// With no matching observations the result carries only the region,
    /// the timestamp and the insufficient-data pattern.
    pub fn analyze(region: Region, observations: &[Observation], now: DateTime<Utc>) -> RegionalAnalysis {
        let region_data: Vec<&Observation> = observations
            .iter()
            .filter(|o| o.region == region.as_str())
            .collect();

        if region_data.is_empty() {
            tracing::debug!("No observations for region {}", region);
            return RegionalAnalysis::insufficient(region.as_str(), now);
        }

        let temperatures: Vec<f64> = region_data.iter().map(|o| o.temperature).collect();
        let humidities: Vec<f64> = region_data.iter().map(|o| o.humidity).collect();
        let pressures: Vec<f64> = region_data.iter().map(|o| o.pressure).collect();
        let wind_speeds: Vec<f64> = region_data.iter().map(|o| o.wind_speed).collect();

        let average_temperature = mean(&temperatures);
        let average_humidity = mean(&humidities);
        let average_pressure = mean(&pressures);
        let average_wind_speed = mean(&wind_speeds);

        let dominant_wind_direction = dominant_label(region_data.iter().map(|o| o.wind_direction.as_str()))
            .unwrap_or(UNKNOWN_DIRECTION)
            .to_string();

        tracing::debug!(
            "Analyzed {} observations for region {}",
            region_data.len(),
            region
        );

        RegionalAnalysis {
            region: region.as_str().to_string(),
            analysis_date: now,
            average_temperature,
            average_humidity,
            average_pressure,
            average_wind_speed,
            dominant_wind_direction,
            weather_pattern: WeatherPattern::classify(average_pressure, average_humidity),
            forecast_reliability: Some(Reliability::from_std_dev(population_std_dev(&temperatures))),
            recommendations: Self::recommendations(
                region,
                average_temperature,
                average_humidity,
                average_wind_speed,
            ),
        }
    }

    /// Advisory list, in order: cold or heat, humidity, wind, region note
    pub fn recommendations(
        region: Region,
        average_temperature: f64,
        average_humidity: f64,
        average_wind_speed: f64,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        if average_temperature < 0.0 {
            recommendations.push(ICE_WARNING.to_string());
        } else if average_temperature > 30.0 {
            recommendations.push(HEAT_WARNING.to_string());
        }

        if average_humidity > 80.0 {
            recommendations.push(HUMIDITY_NOTE.to_string());
        }

        if average_wind_speed > 10.0 {
            recommendations.push(WIND_CAUTION.to_string());
        }

        recommendations.push(region.advisory_note().to_string());
        recommendations
    }
}
