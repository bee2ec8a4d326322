//! API factory and connection settings.

use std::sync::Arc;
use std::time::Duration;

use crate::error::Result;
use crate::providers::RestVesselApi;
use crate::traits::VesselApi;

/// 默认服务地址
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";
/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the resource service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme, host and port. The `/api/embarcaciones` path is appended.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ApiConfig {
    /// Settings with default timeouts for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Override the whole-request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Creates a [`VesselApi`] for the given settings.
///
/// The returned API is wrapped in `Arc<dyn VesselApi>` for sharing across
/// async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use embarcacion_provider::{create_api, ApiConfig};
///
/// let api = create_api(&ApiConfig::new("http://localhost:8081")).unwrap();
/// assert_eq!(api.id(), "embarcaciones");
/// ```
pub fn create_api(config: &ApiConfig) -> Result<Arc<dyn VesselApi>> {
    Ok(Arc::new(RestVesselApi::new(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;

    #[test]
    fn default_points_at_local_service() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8081");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn create_api_accepts_http_url() {
        let api = create_api(&ApiConfig::new("http://127.0.0.1:9/")).unwrap();
        assert_eq!(api.id(), "embarcaciones");
    }

    #[test]
    fn create_api_rejects_garbage_url() {
        let result = create_api(&ApiConfig::new("not a url"));
        assert!(matches!(
            result,
            Err(ProviderError::InvalidParameter { ref param, .. }) if param == "base_url"
        ));
    }
}
