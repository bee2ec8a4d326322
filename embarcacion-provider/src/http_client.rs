//! HTTP 请求工具
//!
//! 统一的发送、日志与响应读取流程。请求本身由调用方构造（URL、方法、请求体），
//! 这里只负责执行并把传输层错误映射为 [`ProviderError`]。
//!
//! 不做重试：任何失败都直接返回给调用方。

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;

/// 日志中响应体的最大字符数
const LOG_BODY_LIMIT: usize = 256;

/// 截断过长的响应体，避免刷屏日志
pub(crate) fn truncate_for_log(s: &str) -> String {
    let total = s.chars().count();
    if total <= LOG_BODY_LIMIT {
        return s.to_string();
    }
    let head: String = s.chars().take(LOG_BODY_LIMIT).collect();
    format!("{head}... [truncated, total {total} chars]")
}

/// HTTP 工具函数集
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// 执行请求，返回 `(状态码, 响应体)`
    ///
    /// 非 2xx 状态不在这里处理，由调用方结合上下文映射。
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: format!("Failed to read response body: {e}"),
                }
            }
        })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// 解析 JSON 响应
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}
