use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{NewVessel, Vessel};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// HTTP 状态码
    pub status: u16,
    /// 原始响应体
    pub message: String,
}

impl RawApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 记录 ID（用于 `RecordNotFound`）
    pub record_id: Option<String>,
}

impl ErrorContext {
    pub fn record(id: i64) -> Self {
        Self {
            record_id: Some(id.to_string()),
        }
    }
}

/// 错误映射 Trait（内部使用）
/// 将非 2xx 响应映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：序列化错误
    fn serialization_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::SerializationError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: Some(raw.status.to_string()),
            raw_message: raw.message,
        }
    }
}

/// 船只资源服务 Trait
///
/// Every method performs exactly one HTTP exchange. Implementations must not
/// retry, cache, or reorder calls.
#[async_trait]
pub trait VesselApi: Send + Sync {
    /// 服务标识符，出现在错误和日志中
    fn id(&self) -> &'static str;

    /// 获取全部船只记录（服务端顺序）
    async fn list_vessels(&self) -> Result<Vec<Vessel>>;

    /// 创建船只，返回带服务端 ID 的记录
    async fn create_vessel(&self, vessel: &NewVessel) -> Result<Vessel>;

    /// 以完整记录替换同 ID 的记录
    async fn update_vessel(&self, vessel: &Vessel) -> Result<()>;

    /// 删除指定 ID 的记录
    async fn delete_vessel(&self, id: i64) -> Result<()>;
}
