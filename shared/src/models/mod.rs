//! Domain models for the regional weather analytics engine

mod analysis;
mod climate;
mod forecast;
mod observation;
mod region;
mod region_info;

pub use analysis::*;
pub use climate::*;
pub use forecast::*;
pub use observation::*;
pub use region::*;
pub use region_info::*;
