//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, TableMessage};
use crate::model::{App, RowMode};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端大小改变时下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press，忽略 Release 和 Repeat（Windows 终端会重复上报）
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::TOGGLE_FORM.matches(&key) {
        return AppMessage::ToggleForm;
    }
    if DefaultKeymap::BEGIN_EDIT.matches(&key) {
        return AppMessage::BeginEdit;
    }
    if DefaultKeymap::FOCUS_FORM.matches(&key) {
        return AppMessage::FocusForm;
    }
    if DefaultKeymap::FOCUS_TABLE.matches(&key) {
        return AppMessage::FocusTable;
    }

    // 根据焦点位置处理按键
    if app.focus.is_form() && app.vessels.show_form {
        return handle_form_keys(key).map_or(AppMessage::Noop, AppMessage::Form);
    }

    // 按选中行的子状态路由；↑/↓ 在任何子状态下都可以离开当前行
    let msg = match key.code {
        KeyCode::Up => Some(TableMessage::SelectPrevious),
        KeyCode::Down => Some(TableMessage::SelectNext),
        _ => match app.table.selected_mode(&app.vessels.vessels) {
            RowMode::ConfirmDelete => handle_confirm_keys(key),
            RowMode::Edit => handle_row_edit_keys(key),
            RowMode::Browse => handle_table_keys(key),
        },
    };
    msg.map_or(AppMessage::Noop, AppMessage::Table)
}

/// 可输入字符（无修饰键或仅 Shift）
fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            Some(c)
        }
        _ => None,
    }
}

/// 创建表单
fn handle_form_keys(key: KeyEvent) -> Option<FormMessage> {
    match key.code {
        KeyCode::Tab => Some(FormMessage::NextField),
        KeyCode::BackTab => Some(FormMessage::PrevField),
        KeyCode::Enter => Some(FormMessage::Submit),
        KeyCode::Esc => Some(FormMessage::Cancel),
        KeyCode::Backspace => Some(FormMessage::Backspace),
        _ => typed_char(&key).map(FormMessage::Input),
    }
}

/// 删除确认中
fn handle_confirm_keys(key: KeyEvent) -> Option<TableMessage> {
    match key.code {
        KeyCode::Char('y' | 'Y' | 's' | 'S') | KeyCode::Enter => Some(TableMessage::ConfirmDelete),
        KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(TableMessage::CancelDelete),
        _ => None,
    }
}

/// 行内编辑中
fn handle_row_edit_keys(key: KeyEvent) -> Option<TableMessage> {
    match key.code {
        KeyCode::Tab => Some(TableMessage::EditNextField),
        KeyCode::BackTab => Some(TableMessage::EditPrevField),
        KeyCode::Enter => Some(TableMessage::CommitEdit),
        KeyCode::Esc => Some(TableMessage::CancelEdit),
        KeyCode::Backspace => Some(TableMessage::EditBackspace),
        _ => typed_char(&key).map(TableMessage::EditInput),
    }
}

/// 表格浏览
fn handle_table_keys(key: KeyEvent) -> Option<TableMessage> {
    if !key.modifiers.is_empty() {
        return None;
    }
    match key.code {
        KeyCode::Char('k') => Some(TableMessage::SelectPrevious),
        KeyCode::Char('j') => Some(TableMessage::SelectNext),
        KeyCode::Home => Some(TableMessage::SelectFirst),
        KeyCode::End => Some(TableMessage::SelectLast),
        KeyCode::Enter | KeyCode::Char('e') => Some(TableMessage::StartEdit),
        KeyCode::Delete | KeyCode::Char('d') => Some(TableMessage::RequestDelete),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embarcacion_core::types::RecordSchema;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn alt(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT))
    }

    #[test]
    fn global_shortcuts() {
        let app = App::new(RecordSchema::V1);
        assert!(matches!(handle_event(alt('q'), &app), AppMessage::Quit));
        assert!(matches!(handle_event(alt('n'), &app), AppMessage::ToggleForm));
        assert!(matches!(handle_event(alt('r'), &app), AppMessage::Refresh));
        assert!(matches!(handle_event(alt('e'), &app), AppMessage::BeginEdit));
    }

    #[test]
    fn table_keys_when_browsing() {
        let app = App::new(RecordSchema::V1);
        assert!(matches!(
            handle_event(press(KeyCode::Char('j')), &app),
            AppMessage::Table(TableMessage::SelectNext)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('d')), &app),
            AppMessage::Table(TableMessage::RequestDelete)
        ));
    }

    fn app_with_rows(count: i64) -> App {
        let mut app = App::new(RecordSchema::V1);
        app.vessels.vessels = (1..=count)
            .map(|id| embarcacion_core::types::Vessel {
                id,
                name: format!("Lancha {id}"),
                capacity: 10.0,
                description: String::new(),
                scheduled_date: None,
            })
            .collect();
        app
    }

    #[test]
    fn confirm_mode_takes_over_keys_on_pending_row() {
        let mut app = app_with_rows(5);
        app.table.selected = 4;
        app.table.delete_confirm = Some(5);
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Table(TableMessage::CancelDelete)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('j')), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Up), &app),
            AppMessage::Table(TableMessage::SelectPrevious)
        ));
    }

    #[test]
    fn keys_follow_the_selected_row() {
        let mut app = app_with_rows(5);
        app.table.selected = 0;
        app.table.start_edit(&app.vessels.vessels.clone());
        app.table.delete_confirm = Some(3);

        // 编辑行：字符进入草稿
        assert!(matches!(
            handle_event(press(KeyCode::Char('d')), &app),
            AppMessage::Table(TableMessage::EditInput('d'))
        ));

        // 待删除行：确认键
        app.table.selected = 2;
        assert!(matches!(
            handle_event(press(KeyCode::Char('y')), &app),
            AppMessage::Table(TableMessage::ConfirmDelete)
        ));

        // 其他行：浏览键，仍可发起编辑或删除
        app.table.selected = 4;
        assert!(matches!(
            handle_event(press(KeyCode::Char('d')), &app),
            AppMessage::Table(TableMessage::RequestDelete)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('e')), &app),
            AppMessage::Table(TableMessage::StartEdit)
        ));
    }

    #[test]
    fn focused_form_receives_characters() {
        let mut app = App::new(RecordSchema::V1);
        app.vessels.show_form = true;
        app.focus = crate::model::FocusPanel::Form;
        assert!(matches!(
            handle_event(press(KeyCode::Char('j')), &app),
            AppMessage::Form(FormMessage::Input('j'))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::BackTab), &app),
            AppMessage::Form(FormMessage::PrevField)
        ));
    }

    #[test]
    fn release_events_are_ignored() {
        let app = App::new(RecordSchema::V1);
        let mut key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(matches!(handle_event(Event::Key(key), &app), AppMessage::Noop));
    }
}
