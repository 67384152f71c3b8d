//! Shared types and models for the regional weather analytics engine
//!
//! This crate contains the region rule table, record types, statistics
//! helpers and input validation shared by the backend and any other consumer.

pub mod models;
pub mod statistics;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
