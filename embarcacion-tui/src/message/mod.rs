//! src/message/mod.rs
//! Message 层：消息定义
//!
//! 消息是“发生了什么”的纯数据描述，由 Event 层（按键）或 Backend 层
//! （远程操作结果）产生，统一交给 Update 层消费。
//!
//!     src/message/mod.rs
//!         mod app;            // AppMessage：主消息
//!         mod backend;        // BackendMessage：远程操作结果
//!         mod form;           // FormMessage：创建表单
//!         mod table;          // TableMessage：表格与行内编辑
//!
//!
//!     主消息：
//!
//!         pub enum AppMessage {
//!             Quit,                       // 退出
//!             Refresh,                    // fetch_all
//!             ToggleForm,                 // “Nueva Embarcación / Cancelar”
//!             BeginEdit,                  // 选中行 → 预填充的创建表单
//!             FocusForm, FocusTable,      // 切换焦点
//!             Form(FormMessage),
//!             Table(TableMessage),
//!             Backend(BackendMessage),    // 由主循环从通道中取出
//!             Noop,                       // 无操作，用于代替 Option::None
//!         }
//!
//!     在 src/app.rs 中：
//!
//!         while let Ok(msg) = rx.try_recv() {
//!             update(app, AppMessage::Backend(msg));
//!         }
//!         if let Some(event) = poll_event(..)? {
//!             update(app, handle_event(event, app));
//!         }
//!
//!     —— 去往 src/update/mod.rs 吧
//!

mod app;
mod backend;
mod form;
mod table;

pub use app::AppMessage;
pub use backend::BackendMessage;
pub use form::FormMessage;
pub use table::TableMessage;
