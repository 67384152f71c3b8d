//! Region Normalizer plus the per-region read operations built on it

use shared::{
    validate_month, validate_sounding, ClimateRecord, Forecast, Observation, Region, RegionCharacteristics,
    RegionalAnalysis, UpperAirSounding,
};

use crate::config::ForecastConfig;
use crate::error::{AppError, AppResult};
use crate::services::{AnalyticsService, ForecastService};
use crate::store::DataStore;

/// Ingest and per-region queries over the record store
#[derive(Clone)]
pub struct RegionalService {
    store: DataStore,
    analytics: AnalyticsService,
    forecasts: ForecastService,
}

impl RegionalService {
    pub fn new(store: DataStore, settings: ForecastConfig) -> Self {
        Self {
            analytics: AnalyticsService::new(store.clone()),
            forecasts: ForecastService::new(store.clone(), settings),
            store,
        }
    }

    /// Tag `observation` with `region` and apply the region's corrections
    pub fn normalize(mut observation: Observation, region: Region) -> Observation {
        observation.region = region.as_str().to_string();
        region.rule().apply(&mut observation);
        observation
    }

    /// Normalize and store an observation, returning it with its new id
    pub async fn process_observation(&self, observation: Observation, region: Region) -> AppResult<Observation> {
        let stored = self
            .store
            .observations
            .append(Self::normalize(observation, region))
            .await?;
        tracing::info!("Stored observation {} for region {}", stored.id, region);
        Ok(stored)
    }

    /// Like [`process_observation`](Self::process_observation) for a textual region tag
    pub async fn process_by_tag(&self, observation: Observation, tag: &str) -> AppResult<Observation> {
        let region: Region = tag.parse().map_err(AppError::from)?;
        self.process_observation(observation, region).await
    }

    pub async fn observations_for_region(&self, region: Region) -> AppResult<Vec<Observation>> {
        let observations = self.store.observations.get_all().await?;
        Ok(observations
            .into_iter()
            .filter(|o| o.region == region.as_str())
            .collect())
    }

    /// Analyses for every region, in `Region::ALL` order
    pub async fn analyze_all(&self) -> AppResult<Vec<RegionalAnalysis>> {
        let mut analyses = Vec::with_capacity(Region::ALL.len());
        for region in Region::ALL {
            analyses.push(self.analytics.analyze_region(region).await?);
        }
        Ok(analyses)
    }

    /// Forecasts for every region, in `Region::ALL` order
    pub async fn forecast_all(&self, days_ahead: u32) -> AppResult<Vec<(Region, Vec<Forecast>)>> {
        let mut forecasts = Vec::with_capacity(Region::ALL.len());
        for region in Region::ALL {
            forecasts.push((region, self.forecasts.forecast_region(region, days_ahead).await?));
        }
        Ok(forecasts)
    }

    /// First climate record for `region` and `month`
    pub async fn climate_characteristics(&self, region: Region, month: &str) -> AppResult<Option<ClimateRecord>> {
        validate_month(month).map_err(|msg| AppError::Validation {
            field: "month".to_string(),
            message: msg.to_string(),
        })?;

        let records = self.store.climate.get_all().await?;
        Ok(records
            .into_iter()
            .find(|c| c.region == region.as_str() && c.month.eq_ignore_ascii_case(month)))
    }

    /// Replace every stored climate record
    ///
    /// Region tags are rewritten to their canonical form; an unknown tag or
    /// month rejects the whole batch.
    pub async fn save_climate(&self, records: Vec<ClimateRecord>) -> AppResult<Vec<ClimateRecord>> {
        let records = records
            .into_iter()
            .map(Self::checked_climate)
            .collect::<AppResult<Vec<_>>>()?;
        self.store.climate.replace_all(&records).await?;
        tracing::info!("Saved {} climate records", records.len());
        Ok(records)
    }

    /// Append one climate record, returning it with its new id
    pub async fn add_climate_record(&self, record: ClimateRecord) -> AppResult<ClimateRecord> {
        let stored = self.store.climate.append(Self::checked_climate(record)?).await?;
        tracing::info!("Stored climate record {} for {} in {}", stored.id, stored.region, stored.month);
        Ok(stored)
    }

    fn checked_climate(mut record: ClimateRecord) -> AppResult<ClimateRecord> {
        let region: Region = record.region.parse()?;
        validate_month(&record.month).map_err(|msg| AppError::Validation {
            field: "month".to_string(),
            message: msg.to_string(),
        })?;
        record.region = region.as_str().to_string();
        Ok(record)
    }

    pub async fn record_sounding(&self, sounding: UpperAirSounding) -> AppResult<UpperAirSounding> {
        validate_sounding(&sounding).map_err(|msg| AppError::ValidationError(msg.to_string()))?;
        let stored = self.store.soundings.append(sounding).await?;
        tracing::info!("Stored upper-air sounding {} at {} m", stored.id, stored.altitude);
        Ok(stored)
    }

    /// Stored soundings, optionally restricted to one region
    pub async fn soundings(&self, region: Option<Region>) -> AppResult<Vec<UpperAirSounding>> {
        let soundings = self.store.soundings.get_all().await?;
        Ok(match region {
            Some(region) => soundings
                .into_iter()
                .filter(|s| s.region == region.as_str())
                .collect(),
            None => soundings,
        })
    }

    pub async fn region_characteristics(&self) -> AppResult<Vec<RegionCharacteristics>> {
        self.store.regions.get_all().await
    }

    pub async fn save_region_characteristics(&self, characteristics: &[RegionCharacteristics]) -> AppResult<()> {
        self.store.regions.replace_all(characteristics).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_sets_canonical_tag() {
        let raw = Observation {
            region: "whatever".to_string(),
            humidity: 25.0,
            pressure: 1000.0,
            ..Default::default()
        };
        let normalized = RegionalService::normalize(raw, Region::Middle);
        assert_eq!(normalized.region, "Middle");
        assert_eq!(normalized.humidity, 30.0);
        assert_eq!(normalized.pressure, 1000.0);
    }

    #[test]
    fn test_normalize_upper_scales_wind() {
        let raw = Observation {
            wind_speed: 5.0,
            humidity: 50.0,
            pressure: 1000.0,
            ..Default::default()
        };
        let normalized = RegionalService::normalize(raw, Region::Upper);
        assert_eq!(normalized.region, "Upper");
        assert!((normalized.wind_speed - 6.0).abs() < 1e-9);
        assert_eq!(normalized.pressure, 980.0);
    }

    #[test]
    fn test_checked_climate_canonicalizes_region() {
        let record = ClimateRecord {
            region: "mid".to_string(),
            month: "July".to_string(),
            ..Default::default()
        };
        let checked = RegionalService::checked_climate(record).unwrap();
        assert_eq!(checked.region, "Middle");
    }

    #[test]
    fn test_checked_climate_rejects_unknown_region_and_month() {
        let bad_region = ClimateRecord {
            region: "Polar".to_string(),
            month: "July".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            RegionalService::checked_climate(bad_region),
            Err(AppError::InvalidRegion(_))
        ));

        let bad_month = ClimateRecord {
            region: "Upper".to_string(),
            month: "Julember".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            RegionalService::checked_climate(bad_month),
            Err(AppError::Validation { ref field, .. }) if field == "month"
        ));
    }
}
