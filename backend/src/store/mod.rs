//! File-backed record store, one JSON document per record kind

mod json_store;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use shared::{ClimateRecord, Forecast, Observation, RegionCharacteristics, UpperAirSounding};

use crate::error::AppResult;

pub use json_store::{JsonStore, Record};

pub const OBSERVATIONS_FILE: &str = "weather_data.json";
pub const FORECASTS_FILE: &str = "forecast_data.json";
pub const CLIMATE_FILE: &str = "climate_data.json";
pub const SOUNDINGS_FILE: &str = "aerological_data.json";
pub const REGIONS_FILE: &str = "region_data.json";

/// Handles to every record kind; cheap to clone
#[derive(Clone)]
pub struct DataStore {
    data_dir: PathBuf,
    pub observations: Arc<JsonStore<Observation>>,
    pub forecasts: Arc<JsonStore<Forecast>>,
    pub climate: Arc<JsonStore<ClimateRecord>>,
    pub soundings: Arc<JsonStore<UpperAirSounding>>,
    pub regions: Arc<JsonStore<RegionCharacteristics>>,
}

impl DataStore {
    /// Open the store rooted at `data_dir`, creating the directory if needed
    pub async fn open(data_dir: impl AsRef<Path>) -> AppResult<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&data_dir).await?;
        tracing::info!("Record store at {}", data_dir.display());

        Ok(Self {
            observations: Arc::new(JsonStore::new(data_dir.join(OBSERVATIONS_FILE))),
            forecasts: Arc::new(JsonStore::new(data_dir.join(FORECASTS_FILE))),
            climate: Arc::new(JsonStore::new(data_dir.join(CLIMATE_FILE))),
            soundings: Arc::new(JsonStore::new(data_dir.join(SOUNDINGS_FILE))),
            regions: Arc::new(JsonStore::new(data_dir.join(REGIONS_FILE))),
            data_dir,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Record for Observation {
    fn id(&self) -> i64 {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl Record for Forecast {
    fn id(&self) -> i64 {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl Record for ClimateRecord {
    fn id(&self) -> i64 {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl Record for UpperAirSounding {
    fn id(&self) -> i64 {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
