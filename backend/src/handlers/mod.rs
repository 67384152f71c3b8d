//! HTTP handlers for the regional weather analytics API

pub mod analysis;
pub mod climate;
pub mod forecasts;
pub mod health;
pub mod observations;
pub mod regions;

pub use analysis::*;
pub use climate::*;
pub use forecasts::*;
pub use health::*;
pub use observations::*;
pub use regions::*;
