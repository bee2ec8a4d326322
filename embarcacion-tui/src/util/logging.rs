//! 文件日志
//!
//! TUI 占用整个终端，日志只能写文件。core / provider 使用 `log` 宏，
//! 由 tracing-subscriber 的 `tracing-log` 桥接进同一个输出。

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_NAME: &str = "embarcacion-tui.log";

/// 初始化日志，返回的 guard 需持有到进程结束
///
/// 级别由 `RUST_LOG` 控制，默认 `info`。
pub fn init_logging(dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .context("Failed to install the tracing subscriber")?;

    Ok(guard)
}
