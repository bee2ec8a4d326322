//! 配置服务
//!
//! 配置文件：`<config dir>/embarcacion-tui/config.json`，缺失的字段取默认值。
//! 环境变量 `EMBARCACION_API_URL` / `EMBARCACION_LANG` 优先于配置文件。

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use embarcacion_core::types::RecordSchema;
use embarcacion_provider::ApiConfig;
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 应用目录名
pub const APP_DIR_NAME: &str = "embarcacion-tui";
const CONFIG_FILE_NAME: &str = "config.json";

pub const ENV_API_URL: &str = "EMBARCACION_API_URL";
pub const ENV_LANG: &str = "EMBARCACION_LANG";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// 服务地址（不含 `/api/embarcaciones`）
    pub api_base_url: String,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 记录版本：`v1` 或 `v2`（带日期）
    pub record_revision: RecordSchema,
    /// 界面语言代码
    pub language: String,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        let api = ApiConfig::default();
        Self {
            api_base_url: api.base_url,
            request_timeout_secs: api.request_timeout.as_secs(),
            record_revision: RecordSchema::default(),
            language: Language::default().code().to_string(),
            theme: Theme::default(),
        }
    }
}

impl AppConfig {
    /// 应用环境变量覆盖
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.api_base_url = url;
        }
        if let Some(lang) = lookup(ENV_LANG).filter(|v| !v.trim().is_empty()) {
            self.language = lang;
        }
    }

    /// 界面语言；未知代码回退到默认语言
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_else(|| {
            log::warn!("Unknown language '{}', falling back to default", self.language);
            Language::default()
        })
    }

    /// 转换为服务客户端配置
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.api_base_url.clone())
            .with_request_timeout(Duration::from_secs(self.request_timeout_secs.max(1)))
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地 JSON 文件配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<dir>/config.json`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Malformed config file {}", self.path.display()))
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, text)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

/// 应用数据目录：`<config dir>/embarcacion-tui`
pub fn app_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .context("Could not determine the user config directory")
}
