//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
    /// 状态栏显示的按键文本
    pub label: &'static str,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode, label: &'static str) -> Self {
        Self {
            modifiers,
            code,
            label,
        }
    }

    pub const fn alt(c: char, label: &'static str) -> Self {
        Self::new(KeyModifiers::ALT, KeyCode::Char(c), label)
    }

    pub const fn ctrl(c: char, label: &'static str) -> Self {
        Self::new(KeyModifiers::CONTROL, KeyCode::Char(c), label)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::alt('q', "Alt+q");
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl('c', "Ctrl+c");
    pub const REFRESH: KeyBinding = KeyBinding::alt('r', "Alt+r");

    // 表单
    pub const TOGGLE_FORM: KeyBinding = KeyBinding::alt('n', "Alt+n");
    pub const BEGIN_EDIT: KeyBinding = KeyBinding::alt('e', "Alt+e");

    // 焦点
    pub const FOCUS_FORM: KeyBinding = KeyBinding::alt('f', "Alt+f");
    pub const FOCUS_TABLE: KeyBinding = KeyBinding::alt('t', "Alt+t");
}
