//! 表格消息处理
//!
//! 加载状态不阻止表格操作；并发操作的结果按票据顺序合并。

use embarcacion_core::types::OperationKind;

use crate::message::TableMessage;
use crate::model::{App, Command};

pub fn update(app: &mut App, msg: TableMessage) {
    let len = app.vessels.vessels.len();
    let table = &mut app.table;

    match msg {
        TableMessage::SelectPrevious => table.select_previous(),
        TableMessage::SelectNext => table.select_next(len),
        TableMessage::SelectFirst => table.select_first(),
        TableMessage::SelectLast => table.select_last(len),

        TableMessage::StartEdit => table.start_edit(&app.vessels.vessels),
        TableMessage::EditInput(c) => table.edit_input(c),
        TableMessage::EditBackspace => table.edit_backspace(),
        TableMessage::EditNextField => table.edit_next_field(),
        TableMessage::EditPrevField => table.edit_prev_field(),
        TableMessage::CommitEdit => {
            if let Some(record) = table.commit_edit() {
                app.dispatch(OperationKind::Update, |ticket| Command::Update(ticket, record));
            }
        }
        TableMessage::CancelEdit => table.cancel_edit(),

        TableMessage::RequestDelete => table.request_delete(&app.vessels.vessels),
        TableMessage::ConfirmDelete => {
            if let Some(id) = table.confirm_delete() {
                app.dispatch(OperationKind::Delete, |ticket| Command::Delete(ticket, id));
            }
        }
        TableMessage::CancelDelete => table.cancel_delete(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::AppMessage;
    use crate::update::test_support::app_with;
    use crate::update::update as dispatch;

    fn send(app: &mut App, msg: TableMessage) {
        dispatch(app, AppMessage::Table(msg));
    }

    #[test]
    fn inline_rename_queues_full_update() {
        let mut app = app_with(5);
        app.table.selected = 2;
        send(&mut app, TableMessage::StartEdit);
        for _ in 0.."Lancha 3".len() {
            send(&mut app, TableMessage::EditBackspace);
        }
        for c in "Lancha B".chars() {
            send(&mut app, TableMessage::EditInput(c));
        }
        send(&mut app, TableMessage::CommitEdit);

        let commands = app.take_commands();
        let [Command::Update(_, record)] = commands.as_slice() else {
            panic!("expected a single update, got {commands:?}");
        };
        assert_eq!(record.id, 3);
        assert_eq!(record.name, "Lancha B");
        assert_eq!(record.description, "descripcion 3");
        assert!((record.capacity - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn delete_then_cancel_makes_no_call() {
        let mut app = app_with(5);
        app.table.selected = 4;
        send(&mut app, TableMessage::RequestDelete);
        assert!(app.table.is_confirming_row(5));

        send(&mut app, TableMessage::CancelDelete);
        assert!(app.take_commands().is_empty());
        assert!(app.table.delete_confirm.is_none());
    }

    #[test]
    fn confirm_queues_delete() {
        let mut app = app_with(5);
        app.table.selected = 4;
        send(&mut app, TableMessage::RequestDelete);
        send(&mut app, TableMessage::ConfirmDelete);

        let commands = app.take_commands();
        assert!(matches!(commands.as_slice(), [Command::Delete(_, 5)]));
    }

    #[test]
    fn delete_another_row_during_inline_edit() {
        let mut app = app_with(5);
        send(&mut app, TableMessage::StartEdit);
        send(&mut app, TableMessage::EditInput('!'));
        send(&mut app, TableMessage::SelectNext);
        send(&mut app, TableMessage::SelectNext);
        send(&mut app, TableMessage::RequestDelete);
        send(&mut app, TableMessage::ConfirmDelete);

        let commands = app.take_commands();
        assert!(matches!(commands.as_slice(), [Command::Delete(_, 3)]));
        assert_eq!(app.table.editing.as_ref().map(|edit| edit.id), Some(1));
    }

    #[test]
    fn inline_edit_while_delete_is_pending() {
        let mut app = app_with(5);
        app.table.selected = 2;
        send(&mut app, TableMessage::RequestDelete);
        send(&mut app, TableMessage::SelectFirst);
        send(&mut app, TableMessage::StartEdit);
        send(&mut app, TableMessage::CommitEdit);

        let commands = app.take_commands();
        assert!(matches!(commands.as_slice(), [Command::Update(_, record)] if record.id == 1));
        assert!(app.table.is_confirming_row(3));
    }

    #[test]
    fn table_actions_work_while_loading() {
        let mut app = app_with(2);
        dispatch(&mut app, AppMessage::Refresh);
        send(&mut app, TableMessage::RequestDelete);
        send(&mut app, TableMessage::ConfirmDelete);

        let commands = app.take_commands();
        assert_eq!(commands.len(), 2);
        assert!(app.vessels.is_loading());
    }
}
