//! Embarcaciones TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与远程服务 (`backend/`)
//!
//!
//! 启动顺序：
//!
//!     tokio 运行时           // 主线程进入运行时上下文，后台任务在工作线程上执行
//!     bootstrap()            // 先 init_logging()（写文件），再加载配置
//!                            // config.json + EMBARCACION_API_URL / EMBARCACION_LANG
//!     set_language / set_theme
//!     CoreService::new()     // VesselApi + mpsc 发送端
//!     init_terminal()
//!     app::run()             // 主循环
//!     restore_terminal()     // 无论成功与否，都恢复终端

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;

use backend::{AppConfig, ConfigService, CoreService, LocalConfigService, app_dir};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 运行时：主线程只负责 UI，远程调用交给工作线程
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;
    let _enter = runtime.enter();

    // 2. 日志与配置
    let (_log_guard, config) = bootstrap(&app_dir()?)?;
    tracing::info!(
        "Starting embarcacion-tui v{} against {}",
        env!("CARGO_PKG_VERSION"),
        config.api_base_url
    );

    i18n::set_language(config.language());
    view::theme::set_theme(config.theme);

    // 3. 后台服务
    let api = embarcacion_provider::create_api(&config.api_config())
        .with_context(|| format!("Invalid API base URL '{}'", config.api_base_url))?;
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let backend = CoreService::new(api, tx);

    // 4. 终端与主循环
    let mut terminal = init_terminal()?;
    let mut app = model::App::new(config.record_revision);

    let result = app::run(&mut terminal, &mut app, &backend, &mut rx);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        tracing::error!("Main loop failed: {e:#}");
    }
    result
}

/// 日志须先于配置初始化；guard 需持有到进程结束
fn bootstrap(dir: &Path) -> Result<(WorkerGuard, AppConfig)> {
    let guard = init_logging(dir)?;
    let config = load_config(&LocalConfigService::in_dir(dir))?;
    Ok((guard, config))
}

fn load_config(service: &LocalConfigService) -> Result<AppConfig> {
    let mut config = service.load()?;
    if !service.path().exists() {
        // 首次启动写出默认配置，方便用户修改
        if let Err(e) = service.save(&config) {
            log::warn!("Could not write default config: {e:#}");
        }
    }
    config.apply_env_overrides(|key| std::env::var(key).ok());
    Ok(config)
}
