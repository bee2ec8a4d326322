//! # embarcacion-provider
//!
//! Client library for the embarcaciones (vessel) resource service: the wire
//! types, the [`VesselApi`] abstraction and its REST implementation.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use embarcacion_provider::{create_api, ApiConfig, NewVessel, VesselApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = create_api(&ApiConfig::new("http://localhost:8081"))?;
//!
//!     let created = api
//!         .create_vessel(&NewVessel {
//!             name: "Lancha A".to_string(),
//!             capacity: 12.0,
//!             description: "pesca".to_string(),
//!             scheduled_date: None,
//!         })
//!         .await?;
//!
//!     for vessel in api.list_vessels().await? {
//!         println!("{} {} ({})", vessel.id, vessel.name, vessel.capacity);
//!     }
//!
//!     api.delete_vessel(created.id).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::RecordNotFound`]: the server answered 404 for an id
//! - [`ProviderError::InvalidParameter`]: the server rejected the body (400/422)
//! - [`ProviderError::NetworkError`] / [`ProviderError::Timeout`]: transport failures
//!
//! Nothing is retried; a failed call surfaces immediately.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

pub use error::{ProviderError, Result};

pub use factory::{ApiConfig, create_api};

pub use traits::VesselApi;

pub use types::{NewVessel, Vessel};

pub use utils::{capacity, datetime};

pub use providers::RestVesselApi;
