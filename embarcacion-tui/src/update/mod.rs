//! src/update/mod.rs
//! Update 层：消费消息、修改状态
//!
//!     pub fn update(app: &mut App, msg: AppMessage)
//!
//! Update 层不做 I/O。需要访问远程服务时，它为操作领取一张票据，
//! 并排入一个 `Command`；主循环在下一轮把命令交给 Backend 层执行，
//! 结果以 `AppMessage::Backend` 的形式回到这里。
//!
//!     mod backend;        // 远程结果 → 列表 / 横幅 / 表单 / 表格
//!     mod form;           // 创建表单
//!     mod table;          // 选择、行内编辑、两步删除
//!

mod backend;
mod form;
mod table;

use embarcacion_core::types::OperationKind;

use crate::message::AppMessage;
use crate::model::{App, Command, FocusPanel};

/// 处理消息，更新应用状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Refresh => fetch_all(app),

        AppMessage::ToggleForm => toggle_form(app),

        AppMessage::BeginEdit => begin_edit(app),

        AppMessage::FocusForm => {
            if app.vessels.show_form {
                app.focus = FocusPanel::Form;
            }
        }

        AppMessage::FocusTable => {
            app.focus = FocusPanel::Table;
        }

        AppMessage::Form(form_msg) => form::update(app, form_msg),

        AppMessage::Table(table_msg) => table::update(app, table_msg),

        AppMessage::Backend(backend_msg) => backend::update(app, backend_msg),

        AppMessage::Noop => {}
    }
    app.sync_focus();
}

/// 整表获取
pub fn fetch_all(app: &mut App) {
    app.dispatch(OperationKind::Fetch, Command::Fetch);
}

/// “Nueva Embarcación / Cancelar”；加载中不可用
fn toggle_form(app: &mut App) {
    if app.vessels.is_loading() {
        return;
    }
    if app.vessels.show_form {
        cancel_form(app);
    } else {
        let editing = app.vessels.editing.clone();
        app.form.seed(editing.as_ref());
        app.vessels.open_form(editing);
        app.focus = FocusPanel::Form;
    }
}

/// 隐藏表单并清除暂存记录
fn cancel_form(app: &mut App) {
    app.vessels.close_form();
    app.form.reset();
    app.focus = FocusPanel::Table;
}

/// 暂存选中行，并以它预填充创建表单
fn begin_edit(app: &mut App) {
    let Some(vessel) = app.vessels.vessels.get(app.table.selected).cloned() else {
        return;
    };
    tracing::debug!("Begin edit of vessel {}", vessel.id);
    app.form.seed(Some(&vessel));
    app.vessels.open_form(Some(vessel));
    app.focus = FocusPanel::Form;
}

#[cfg(test)]
pub(crate) mod test_support {
    use embarcacion_core::error::ProviderError;
    use embarcacion_core::types::{RecordSchema, Vessel};

    use crate::model::App;

    pub fn vessel(id: i64) -> Vessel {
        Vessel {
            id,
            name: format!("Lancha {id}"),
            capacity: 10.0,
            description: format!("descripcion {id}"),
            scheduled_date: None,
        }
    }

    /// 已载入 1..=n 号记录的应用
    pub fn app_with(n: i64) -> App {
        let mut app = App::new(RecordSchema::V1);
        app.vessels.vessels = (1..=n).map(vessel).collect();
        app
    }

    pub fn network_error() -> ProviderError {
        ProviderError::NetworkError {
            provider: "embarcaciones".to_string(),
            detail: "connection refused".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::app_with;
    use super::*;
    use crate::message::FormMessage;

    #[test]
    fn refresh_queues_a_fetch() {
        let mut app = app_with(0);
        update(&mut app, AppMessage::Refresh);

        let commands = app.take_commands();
        assert!(matches!(commands.as_slice(), [Command::Fetch(_)]));
        assert!(app.vessels.is_loading());
        assert!(app.take_commands().is_empty());
    }

    #[test]
    fn toggle_opens_blank_form_and_focuses_it() {
        let mut app = app_with(2);
        update(&mut app, AppMessage::ToggleForm);
        assert!(app.vessels.show_form);
        assert_eq!(app.focus, FocusPanel::Form);
        assert_eq!(app.form.draft.name, "");

        update(&mut app, AppMessage::ToggleForm);
        assert!(!app.vessels.show_form);
        assert_eq!(app.focus, FocusPanel::Table);
    }

    #[test]
    fn toggle_is_ignored_while_loading() {
        let mut app = app_with(0);
        update(&mut app, AppMessage::Refresh);
        update(&mut app, AppMessage::ToggleForm);
        assert!(!app.vessels.show_form);
    }

    #[test]
    fn begin_edit_seeds_form_from_selected_row() {
        let mut app = app_with(3);
        app.table.selected = 1;
        update(&mut app, AppMessage::BeginEdit);

        assert!(app.vessels.show_form);
        assert_eq!(app.vessels.editing.as_ref().map(|v| v.id), Some(2));
        assert_eq!(app.form.draft.name, "Lancha 2");
        assert_eq!(app.form.draft.capacity, "10");
        assert_eq!(app.focus, FocusPanel::Form);
    }

    #[test]
    fn cancel_form_clears_staged_record() {
        let mut app = app_with(3);
        update(&mut app, AppMessage::BeginEdit);
        update(&mut app, AppMessage::Form(FormMessage::Cancel));

        assert!(!app.vessels.show_form);
        assert!(app.vessels.editing.is_none());
        assert!(app.take_commands().is_empty());
    }

    #[test]
    fn focus_form_requires_visible_form() {
        let mut app = app_with(0);
        update(&mut app, AppMessage::FocusForm);
        assert_eq!(app.focus, FocusPanel::Table);
    }
}
