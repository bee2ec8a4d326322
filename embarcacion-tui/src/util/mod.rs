//! src/util/mod.rs
//! Util 层：与业务无关的基础设施
//!
//!     src/util/mod.rs
//!         mod logging;        // 文件日志（tracing + tracing-appender）
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     启动顺序（见 src/main.rs）：
//!
//!         let _guard = init_logging(&dir)?;       // 1. 日志写入文件，不污染备用屏幕
//!         let mut terminal = init_terminal()?;    // 2. 原始模式 + 备用屏幕
//!         let result = app::run(...);             // 3. 主循环
//!         restore_terminal(&mut terminal)?;       // 4. 无论 run 成功与否都要恢复
//!         result
//!
//!     `_guard` 必须活到进程退出，否则缓冲中的日志会丢失。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{Term, init_terminal, restore_terminal};
