//! Embarcaciones Core Library
//!
//! Business logic for the vessel administration screen:
//! - Record model and field validation (`types`, `validation`)
//! - Vessel service: mutations followed by a full refetch (`services`)
//!
//! The remote service is reached through the [`VesselApi`](embarcacion_provider::VesselApi)
//! trait, so every front end (and the tests) can inject its own implementation.

pub mod error;
pub mod services;
pub mod types;
pub mod validation;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{MutationOutcome, ServiceContext, VesselService};
