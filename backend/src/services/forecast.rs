//! Trend-extrapolation forecasts with a static per-region fallback

use chrono::{DateTime, Duration, Utc};
use shared::statistics::{dominant_label, population_std_dev, trend_value};
use shared::{
    validate_days_ahead, Forecast, Observation, Region, DEFAULT_CONDITION,
    DEFAULT_DIRECTION, UNKNOWN_DIRECTION,
};

use crate::config::ForecastConfig;
use crate::error::{AppError, AppResult};
use crate::store::DataStore;

/// Confidence assigned to forecasts built from the static profile
pub const FALLBACK_CONFIDENCE: f64 = 50.0;

/// Number of most recent samples that vote on the predicted condition
const CONDITION_WINDOW: usize = 3;

/// Forecast generator over the stored observation history
#[derive(Clone)]
pub struct ForecastService {
    store: DataStore,
    settings: ForecastConfig,
}

impl ForecastService {
    pub fn new(store: DataStore, settings: ForecastConfig) -> Self {
        Self { store, settings }
    }

    /// Generate `days_ahead` daily forecasts for `region`, starting tomorrow
    pub async fn forecast_region(&self, region: Region, days_ahead: u32) -> AppResult<Vec<Forecast>> {
        validate_days_ahead(days_ahead).map_err(|msg| AppError::Validation {
            field: "days_ahead".to_string(),
            message: msg.to_string(),
        })?;

        let observations = self.store.observations.get_all().await?;
        Ok(Self::build_forecasts(
            region,
            &observations,
            days_ahead,
            Utc::now(),
            &self.settings,
        ))
    }

    /// Build forecasts for the days `now + 1 ..= now + days_ahead`
    ///
    /// Every forecast carries the same predicted values; only the target date
    /// differs. `created_date` is `now` for all of them.
    pub fn build_forecasts(
        region: Region,
        observations: &[Observation],
        days_ahead: u32,
        now: DateTime<Utc>,
        settings: &ForecastConfig,
    ) -> Vec<Forecast> {
        let mut history: Vec<&Observation> = observations
            .iter()
            .filter(|o| o.region == region.as_str())
            .collect();
        // Stable sort: equal timestamps keep store order
        history.sort_by(|a, b| b.date.cmp(&a.date));
        history.truncate(settings.history_window);

        let template = if history.is_empty() {
            tracing::warn!("No history for region {}, using default profile", region);
            Self::fallback_forecast(region)
        } else {
            let recent = &history[..history.len().min(settings.trend_window)];
            tracing::debug!(
                "Extrapolating region {} from {} of {} recent observations",
                region,
                recent.len(),
                history.len()
            );
            Self::trend_forecast(region, recent)
        };

        (1..=days_ahead)
            .map(|day| Forecast {
                forecast_date: now + Duration::days(i64::from(day)),
                created_date: now,
                ..template.clone()
            })
            .collect()
    }

    /// Forecast from the region's static profile
    pub fn fallback_forecast(region: Region) -> Forecast {
        let profile = region.default_profile();
        Forecast {
            location: profile.location.to_string(),
            predicted_temperature: profile.temperature,
            predicted_humidity: profile.humidity,
            predicted_pressure: profile.pressure,
            predicted_wind_speed: profile.wind_speed,
            predicted_wind_direction: DEFAULT_DIRECTION.to_string(),
            predicted_precipitation: 0.0,
            predicted_weather_condition: DEFAULT_CONDITION.to_string(),
            confidence: FALLBACK_CONFIDENCE,
            region: region.as_str().to_string(),
            ..Default::default()
        }
    }

    /// Forecast extrapolated from `recent`, ordered most recent first
    pub fn trend_forecast(region: Region, recent: &[&Observation]) -> Forecast {
        // Sparse samples fall back to the single temperature reading for every field
        let fallback = recent.first().map(|o| o.temperature).unwrap_or(0.0);
        let trend = |select: fn(&Observation) -> f64| {
            let values: Vec<f64> = recent.iter().map(|o| select(*o)).collect();
            trend_value(&values, fallback)
        };

        let temperatures: Vec<f64> = recent.iter().map(|o| o.temperature).collect();
        let humidities: Vec<f64> = recent.iter().map(|o| o.humidity).collect();
        let spread = (population_std_dev(&temperatures) + population_std_dev(&humidities)) / 2.0;

        let mut forecast = Forecast {
            location: recent.first().map(|o| o.location.clone()).unwrap_or_default(),
            predicted_temperature: trend(|o| o.temperature),
            predicted_humidity: trend(|o| o.humidity),
            predicted_pressure: trend(|o| o.pressure),
            predicted_wind_speed: trend(|o| o.wind_speed),
            predicted_wind_direction: dominant_label(recent.iter().map(|o| o.wind_direction.as_str()))
                .unwrap_or(UNKNOWN_DIRECTION)
                .to_string(),
            predicted_precipitation: trend(|o| o.precipitation),
            predicted_weather_condition: dominant_label(
                recent
                    .iter()
                    .take(CONDITION_WINDOW)
                    .map(|o| o.weather_condition.as_str()),
            )
            .unwrap_or(DEFAULT_CONDITION)
            .to_string(),
            region: region.as_str().to_string(),
            ..Default::default()
        };
        forecast.set_confidence(100.0 - spread);
        forecast
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
    }

    fn obs(region: Region, day: u32, temperature: f64) -> Observation {
        Observation {
            region: region.as_str().to_string(),
            date: at(day),
            location: format!("Station {}", day),
            temperature,
            humidity: 60.0,
            pressure: 1010.0,
            wind_speed: 3.0,
            wind_direction: "N".to_string(),
            weather_condition: "Cloudy".to_string(),
            ..Default::default()
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_no_history_uses_default_profile() {
        let now = at(20);
        let forecasts =
            ForecastService::build_forecasts(Region::Lower, &[], 5, now, &ForecastConfig::default());

        assert_eq!(forecasts.len(), 5);
        for (i, f) in forecasts.iter().enumerate() {
            assert_eq!(f.location, "Saint Petersburg");
            assert_eq!(f.predicted_temperature, -2.0);
            assert_eq!(f.predicted_humidity, 85.0);
            assert_eq!(f.predicted_pressure, 1018.0);
            assert_eq!(f.predicted_wind_speed, 4.2);
            assert_eq!(f.predicted_wind_direction, DEFAULT_DIRECTION);
            assert_eq!(f.predicted_precipitation, 0.0);
            assert_eq!(f.predicted_weather_condition, DEFAULT_CONDITION);
            assert_eq!(f.confidence, 50.0);
            assert_eq!(f.region, "Lower");
            assert_eq!(f.created_date, now);
            assert_eq!(f.forecast_date, now + Duration::days(i as i64 + 1));
        }
    }

    #[test]
    fn test_trend_uses_most_recent_first_ordering() {
        // Day 19 is the most recent and reads 10; day 13 is the oldest and reads 16
        let data: Vec<Observation> = (0..7)
            .map(|i| obs(Region::Middle, 13 + i, 16.0 - f64::from(i)))
            .collect();

        let forecasts =
            ForecastService::build_forecasts(Region::Middle, &data, 1, at(20), &ForecastConfig::default());
        let f = &forecasts[0];

        assert!(close(f.predicted_temperature, 13.0 + 6.0 / 7.0));
        assert_eq!(f.location, "Station 19");
    }

    #[test]
    fn test_only_seven_most_recent_are_used() {
        let mut data: Vec<Observation> = (1..=7).map(|d| obs(Region::Upper, d, 100.0)).collect();
        data.extend((10..=16).map(|d| obs(Region::Upper, d, 5.0)));

        let forecasts =
            ForecastService::build_forecasts(Region::Upper, &data, 2, at(20), &ForecastConfig::default());
        assert!(forecasts.iter().all(|f| close(f.predicted_temperature, 5.0)));
        assert!(forecasts.iter().all(|f| f.confidence == 100.0));
    }

    #[test]
    fn test_single_observation_falls_back_to_temperature() {
        let data = vec![obs(Region::Middle, 5, 7.5)];
        let forecasts =
            ForecastService::build_forecasts(Region::Middle, &data, 1, at(20), &ForecastConfig::default());
        let f = &forecasts[0];

        assert_eq!(f.predicted_temperature, 7.5);
        assert_eq!(f.predicted_humidity, 7.5);
        assert_eq!(f.predicted_pressure, 7.5);
        assert_eq!(f.predicted_wind_speed, 7.5);
        assert_eq!(f.predicted_precipitation, 7.5);
        assert_eq!(f.confidence, 100.0);
    }

    #[test]
    fn test_condition_votes_among_three_most_recent() {
        let mut data: Vec<Observation> = (1..=7).map(|d| obs(Region::Lower, d, 1.0)).collect();
        data[6].weather_condition = "Fog".to_string();
        data[5].weather_condition = "Rain".to_string();
        data[4].weather_condition = "Fog".to_string();

        let forecasts =
            ForecastService::build_forecasts(Region::Lower, &data, 1, at(20), &ForecastConfig::default());
        assert_eq!(forecasts[0].predicted_weather_condition, "Fog");
    }

    #[test]
    fn test_condition_tie_goes_to_most_recent() {
        let mut data: Vec<Observation> = (1..=3).map(|d| obs(Region::Lower, d, 1.0)).collect();
        data[2].weather_condition = "Snow".to_string();
        data[1].weather_condition = "Rain".to_string();
        data[0].weather_condition = "Clear".to_string();

        let forecasts =
            ForecastService::build_forecasts(Region::Lower, &data, 1, at(20), &ForecastConfig::default());
        assert_eq!(forecasts[0].predicted_weather_condition, "Snow");
    }

    #[test]
    fn test_confidence_is_clamped_for_wild_spread() {
        let data: Vec<Observation> = (1..=7)
            .map(|d| {
                let mut o = obs(Region::Middle, d, if d % 2 == 0 { -400.0 } else { 400.0 });
                o.humidity = if d % 2 == 0 { 0.0 } else { 100.0 };
                o
            })
            .collect();

        let forecasts =
            ForecastService::build_forecasts(Region::Middle, &data, 1, at(20), &ForecastConfig::default());
        assert_eq!(forecasts[0].confidence, 0.0);
    }

    #[test]
    fn test_zero_days_yields_nothing() {
        let forecasts =
            ForecastService::build_forecasts(Region::Middle, &[], 0, at(20), &ForecastConfig::default());
        assert!(forecasts.is_empty());
    }
}
