//! Core services of the regional weather analytics backend

pub mod accuracy;
pub mod analytics;
pub mod commands;
pub mod forecast;
pub mod region_info;
pub mod regional;

pub use accuracy::AccuracyService;
pub use analytics::AnalyticsService;
pub use commands::Commands;
pub use forecast::ForecastService;
pub use region_info::RegionCatalog;
pub use regional::RegionalService;
