//! 应用主消息枚举

use super::{BackendMessage, FormMessage, TableMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 重新获取列表
    Refresh,

    /// 显示 / 隐藏创建表单
    ToggleForm,

    /// 以选中行打开创建表单
    BeginEdit,

    /// 焦点切到表单
    FocusForm,

    /// 焦点切到表格
    FocusTable,

    /// 创建表单相关消息
    Form(FormMessage),

    /// 表格相关消息
    Table(TableMessage),

    /// 远程操作完成
    Backend(BackendMessage),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
