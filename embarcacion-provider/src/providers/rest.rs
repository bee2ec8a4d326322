//! REST implementation of [`VesselApi`] against `/api/embarcaciones`.

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Url};

use crate::error::{ProviderError, Result};
use crate::factory::ApiConfig;
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError, VesselApi};
use crate::types::{NewVessel, Vessel};

const PROVIDER_NAME: &str = "embarcaciones";
const RESOURCE_PATH: &str = "/api/embarcaciones";

/// Client for the vessel resource service.
///
/// | Operation | Method | Path |
/// |-----------|--------|------|
/// | list      | GET    | `/api/embarcaciones` |
/// | create    | POST   | `/api/embarcaciones` |
/// | update    | PUT    | `/api/embarcaciones/{id}` |
/// | delete    | DELETE | `/api/embarcaciones/{id}` |
#[derive(Debug, Clone)]
pub struct RestVesselApi {
    client: Client,
    collection_url: String,
}

impl RestVesselApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base = config.base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(base).map_err(|e| ProviderError::InvalidParameter {
            provider: PROVIDER_NAME.to_string(),
            param: "base_url".to_string(),
            detail: format!("{base}: {e}"),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ProviderError::InvalidParameter {
                provider: PROVIDER_NAME.to_string(),
                param: "base_url".to_string(),
                detail: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ProviderError::NetworkError {
                provider: PROVIDER_NAME.to_string(),
                detail: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            collection_url: format!("{base}{RESOURCE_PATH}"),
        })
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{id}", self.collection_url)
    }

    /// 2xx 直接返回响应体，其余按上下文映射错误
    fn check_status(&self, status: u16, body: String, ctx: ErrorContext) -> Result<String> {
        if (200..300).contains(&status) {
            Ok(body)
        } else {
            Err(self.map_error(RawApiError::new(status, body), ctx))
        }
    }

    fn to_body<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        serde_json::to_string(value).map_err(|e| self.serialization_error(e))
    }
}

impl ProviderErrorMapper for RestVesselApi {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match (raw.status, context.record_id) {
            (404, Some(record_id)) => ProviderError::RecordNotFound {
                provider: PROVIDER_NAME.to_string(),
                record_id,
                raw_message: Some(raw.message).filter(|m| !m.is_empty()),
            },
            (400 | 422, _) => ProviderError::InvalidParameter {
                provider: PROVIDER_NAME.to_string(),
                param: "body".to_string(),
                detail: raw.message,
            },
            _ => self.unknown_error(raw),
        }
    }
}

#[async_trait]
impl VesselApi for RestVesselApi {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn list_vessels(&self) -> Result<Vec<Vessel>> {
        let url = &self.collection_url;
        let (status, body) =
            HttpUtils::execute_request(self.client.get(url), PROVIDER_NAME, "GET", url).await?;
        let body = self.check_status(status, body, ErrorContext::default())?;
        HttpUtils::parse_json(&body, PROVIDER_NAME)
    }

    async fn create_vessel(&self, vessel: &NewVessel) -> Result<Vessel> {
        let url = &self.collection_url;
        let payload = self.to_body(vessel)?;
        let (status, body) = HttpUtils::execute_request(
            self.client.post(url).body(payload),
            PROVIDER_NAME,
            "POST",
            url,
        )
        .await?;
        let body = self.check_status(status, body, ErrorContext::default())?;
        let created: Vessel = HttpUtils::parse_json(&body, PROVIDER_NAME)?;
        log::info!("[{PROVIDER_NAME}] Created vessel {}", created.id);
        Ok(created)
    }

    async fn update_vessel(&self, vessel: &Vessel) -> Result<()> {
        let url = self.item_url(vessel.id);
        let payload = self.to_body(vessel)?;
        let (status, body) = HttpUtils::execute_request(
            self.client.put(&url).body(payload),
            PROVIDER_NAME,
            "PUT",
            &url,
        )
        .await?;
        self.check_status(status, body, ErrorContext::record(vessel.id))?;
        log::info!("[{PROVIDER_NAME}] Updated vessel {}", vessel.id);
        Ok(())
    }

    async fn delete_vessel(&self, id: i64) -> Result<()> {
        let url = self.item_url(id);
        let (status, body) =
            HttpUtils::execute_request(self.client.delete(&url), PROVIDER_NAME, "DELETE", &url)
                .await?;
        self.check_status(status, body, ErrorContext::record(id))?;
        log::info!("[{PROVIDER_NAME}] Deleted vessel {id}");
        Ok(())
    }
}
