//! Utility modules.

/// Serde helpers for the `capacidad` field.
pub mod capacity;

/// Date serialization helpers for the `fecha` field.
pub mod datetime;
