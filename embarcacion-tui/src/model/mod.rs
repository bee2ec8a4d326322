//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的“唯一真相来源”，只包含数据结构和局部的状态迁移，
//! 不做 I/O。所有状态变更都通过 Update 层触发。
//!
//!     src/model/mod.rs
//!         mod app;            // App：顶层状态
//!         mod command;        // Command：待派发的远程操作
//!         mod focus;          // FocusPanel：表单 / 表格
//!         pub mod state;      // 各部分状态机
//!
//!     App 的组成：
//!
//!         App
//!          ├── vessels: VesselsState     列表、横幅、在途票据、表单显示与暂存记录
//!          ├── form:    CreationForm     创建表单（Editing / Submitting）
//!          └── table:   VesselTable      选择、行内编辑、两步删除
//!

mod app;
mod command;
mod focus;
pub mod state;

pub use app::App;
pub use command::Command;
pub use focus::FocusPanel;
pub use state::{CreationForm, OperationTicket, RowEdit, RowMode, VesselTable, VesselsState};
