//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 创建表单
    Form,
    /// 船只表格
    #[default]
    Table,
}

impl FocusPanel {
    pub fn is_form(self) -> bool {
        matches!(self, FocusPanel::Form)
    }

    pub fn is_table(self) -> bool {
        matches!(self, FocusPanel::Table)
    }
}
