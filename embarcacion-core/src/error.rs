//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use embarcacion_provider::ProviderError;

use crate::validation::ValidationReport;

/// Core layer error type
///
/// Remote kinds wrap the [`ProviderError`] that caused them; the front end
/// shows a fixed per-operation text and keeps the cause for diagnostics.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Listing vessels failed
    #[error("Failed to load vessels: {0}")]
    FetchFailed(ProviderError),

    /// Creating a vessel failed
    #[error("Failed to create vessel: {0}")]
    CreateFailed(ProviderError),

    /// Updating a vessel failed
    #[error("Failed to update vessel: {0}")]
    UpdateFailed(ProviderError),

    /// Deleting a vessel failed
    #[error("Failed to delete vessel: {0}")]
    DeleteFailed(ProviderError),

    /// Local field validation failed; nothing was sent
    #[error("Validation error: {0}")]
    ValidationFailed(ValidationReport),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ValidationFailed(_) => true,
            Self::FetchFailed(e)
            | Self::CreateFailed(e)
            | Self::UpdateFailed(e)
            | Self::DeleteFailed(e) => e.is_expected(),
        }
    }

    /// Log this error at the level chosen by [`is_expected`](Self::is_expected).
    pub(crate) fn log(&self) {
        if self.is_expected() {
            log::warn!("{self}");
        } else {
            log::error!("{self}");
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
