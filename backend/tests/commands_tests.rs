//! Command layer integration tests
//!
//! Every command reports a status line; none of them fail.

use chrono::Utc;
use shared::{Observation, ObservationInput};
use weather_backend::config::ForecastConfig;
use weather_backend::services::commands::{
    Commands, MISSING_FIELDS, SELECT_FORECAST_TO_UPDATE, SELECT_TO_DELETE, SELECT_TO_EVALUATE,
    SELECT_TO_UPDATE,
};
use weather_backend::DataStore;

fn input(region: &str, location: &str) -> ObservationInput {
    ObservationInput {
        region: region.to_string(),
        observation: Observation {
            date: Utc::now(),
            location: location.to_string(),
            temperature: 3.0,
            humidity: 70.0,
            pressure: 1005.0,
            wind_speed: 4.0,
            wind_direction: "E".to_string(),
            weather_condition: "Overcast".to_string(),
            visibility: 8.0,
            cloud_cover: 90.0,
            is_actual: true,
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    fn commands(dir: &tempfile::TempDir) -> Commands {
        let store = tokio_test::block_on(DataStore::open(dir.path())).unwrap();
        Commands::new(store, ForecastConfig::default())
    }

    #[test]
    fn test_add_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let commands = commands(&dir);
        tokio_test::block_on(async {
            let added = commands.add_observation(input("Lower", "Kaliningrad")).await;
            assert_eq!(added.status, "Observation added");
            let stored = added.data.unwrap();
            assert_eq!(stored.id, 1);
            assert_eq!(stored.region, "Lower");
            assert_eq!(stored.temperature, 5.0);

            let loaded = commands.load().await;
            assert_eq!(loaded.status, "Loaded 1 observations and 0 forecasts");
            assert_eq!(loaded.data.unwrap().observations.len(), 1);
        });
    }

    #[test]
    fn test_add_requires_location() {
        let dir = tempfile::tempdir().unwrap();
        let commands = commands(&dir);
        tokio_test::block_on(async {
            let outcome = commands.add_observation(input("Middle", "  ")).await;
            assert_eq!(outcome.status, MISSING_FIELDS);
            assert!(outcome.data.is_none());
        });
    }

    #[test]
    fn test_add_reports_validation_failure() {
        let dir = tempfile::tempdir().unwrap();
        let commands = commands(&dir);
        tokio_test::block_on(async {
            let mut bad = input("Middle", "Tula");
            bad.observation.wind_direction = "Sideways".to_string();
            let outcome = commands.add_observation(bad).await;
            assert!(outcome.status.starts_with("Wind direction"));
        });
    }

    #[test]
    fn test_add_with_unknown_region_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let commands = commands(&dir);
        tokio_test::block_on(async {
            let outcome = commands.add_observation(input("Polar", "Norilsk")).await;
            assert_eq!(outcome.status, "Add observation failed: Invalid region: Polar");
            assert_eq!(commands.load().await.data.unwrap().observations.len(), 0);
        });
    }

    #[test]
    fn test_zero_ids_ask_for_a_selection() {
        let dir = tempfile::tempdir().unwrap();
        let commands = commands(&dir);
        tokio_test::block_on(async {
            assert_eq!(
                commands.update_observation(Observation::default()).await.status,
                SELECT_TO_UPDATE
            );
            assert_eq!(commands.delete_observation(0).await.status, SELECT_TO_DELETE);
            assert_eq!(commands.evaluate_forecast(0).await.status, SELECT_TO_EVALUATE);
            assert_eq!(
                commands.update_forecast(Default::default()).await.status,
                SELECT_FORECAST_TO_UPDATE
            );
        });
    }

    #[test]
    fn test_update_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let commands = commands(&dir);
        tokio_test::block_on(async {
            let mut stored = commands
                .add_observation(input("Middle", "Tula"))
                .await
                .data
                .unwrap();
            stored.location = "Oryol".to_string();

            let updated = commands.update_observation(stored.clone()).await;
            assert_eq!(updated.status, "Observation updated");

            let deleted = commands.delete_observation(stored.id).await;
            assert_eq!(deleted.status, "Observation deleted");

            let again = commands.delete_observation(stored.id).await;
            assert_eq!(again.status, format!("Observation {} not found", stored.id));
        });
    }

    #[test]
    fn test_generate_analyze_evaluate_clear() {
        let dir = tempfile::tempdir().unwrap();
        let commands = commands(&dir);
        tokio_test::block_on(async {
            let generated = commands.generate_forecasts(Some(2)).await;
            assert_eq!(generated.status, "Generated 6 forecasts");
            let forecasts = generated.data.unwrap();
            let ids: Vec<i64> = forecasts.iter().map(|f| f.id).collect();
            assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

            let analyzed = commands.analyze_regions().await;
            assert_eq!(analyzed.status, "Analyzed 3 regions");

            // No actual observation exists for any generated date
            let evaluated = commands.evaluate_forecast(1).await;
            assert_eq!(evaluated.status, "Forecast accuracy: 0.0%");
            assert_eq!(evaluated.data, Some(0.0));

            let cleared = commands.clear_forecasts().await;
            assert_eq!(cleared.status, "All forecasts cleared");
            assert_eq!(commands.load().await.status, "Loaded 0 observations and 0 forecasts");
        });
    }

    #[test]
    fn test_default_horizon_from_settings() {
        let dir = tempfile::tempdir().unwrap();
        let commands = commands(&dir);
        tokio_test::block_on(async {
            let generated = commands.generate_forecasts(None).await;
            assert_eq!(generated.status, "Generated 21 forecasts");
        });
    }

    #[test]
    fn test_generate_reports_invalid_horizon() {
        let dir = tempfile::tempdir().unwrap();
        let commands = commands(&dir);
        tokio_test::block_on(async {
            let outcome = commands.generate_forecasts(Some(0)).await;
            assert!(outcome.status.starts_with("Forecast generation failed:"));
            assert!(outcome.data.is_none());
        });
    }

    #[test]
    fn test_add_rejects_unknown_weather_condition() {
        let dir = tempfile::tempdir().unwrap();
        let commands = commands(&dir);
        tokio_test::block_on(async {
            let mut odd = input("Middle", "Tula");
            odd.observation.weather_condition = "Drizzle".to_string();
            let outcome = commands.add_observation(odd).await;
            assert_eq!(outcome.status, "Unknown weather condition");
            assert_eq!(commands.load().await.data.unwrap().observations.len(), 0);
        });
    }

    #[test]
    fn test_update_forecast_sets_flag() {
        let dir = tempfile::tempdir().unwrap();
        let commands = commands(&dir);
        tokio_test::block_on(async {
            let mut forecast = commands.generate_forecasts(Some(1)).await.data.unwrap().remove(0);
            assert!(!forecast.is_updated);
            forecast.predicted_humidity = 77.0;

            let updated = commands.update_forecast(forecast.clone()).await;
            assert_eq!(updated.status, "Forecast updated");
            assert!(updated.data.unwrap().is_updated);

            let stored = commands.load().await.data.unwrap().forecasts;
            assert!(stored[0].is_updated);
            assert_eq!(stored[0].predicted_humidity, 77.0);
            assert!(!stored[1].is_updated);

            forecast.id = 99;
            let missing = commands.update_forecast(forecast).await;
            assert_eq!(missing.status, "Forecast 99 not found");
        });
    }
}
