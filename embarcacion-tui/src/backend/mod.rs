//! src/backend/mod.rs
//! Backend 层：与 UI 解耦的服务
//!
//!     mod config_service;     // AppConfig：JSON 文件 + 环境变量
//!     mod core_service;       // CoreService：在 tokio 上执行 Command
//!
//!
//!     数据流：
//!
//!         Update ──Command──▶ 主循环 ──execute──▶ CoreService
//!                                                    │ tokio::spawn
//!                                                    ▼
//!                                             VesselService（embarcacion-core）
//!                                                    │
//!         Update ◀──AppMessage::Backend── 主循环 ◀──mpsc──┘
//!

mod config_service;
mod core_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService, app_dir};
pub use core_service::CoreService;
