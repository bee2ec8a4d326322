//! src/event/mod.rs
//! Event 层：把终端输入翻译为 Message
//!
//!     mod handler;        // poll_event / handle_event
//!     mod keymap;         // DefaultKeymap：全局快捷键
//!
//!
//!     handle_event 的分发顺序：
//!
//!         1. 只处理 Press 事件
//!         2. 全局快捷键（Ctrl+c / Alt+q 退出，Alt+n 表单，Alt+r 刷新，
//!            Alt+e 以选中行打开表单，Alt+f / Alt+t 切换焦点）
//!         3. 焦点在表单且表单可见        → FormMessage
//!         4. 表格处于删除确认            → ConfirmDelete / CancelDelete
//!         5. 表格处于行内编辑            → Edit*
//!         6. 其余                        → 选择、开始编辑、请求删除
//!
//!     handle_event 只读 App，不修改状态；修改交给 Update 层。
//!

mod handler;
pub mod keymap;

pub use handler::{handle_event, poll_event};
