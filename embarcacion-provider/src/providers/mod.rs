//! Vessel API implementations

mod rest;

pub use rest::RestVesselApi;
