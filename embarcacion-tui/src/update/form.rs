//! 创建表单消息处理

use embarcacion_core::types::OperationKind;

use crate::message::FormMessage;
use crate::model::{App, Command};

/// 加载中整个表单不可用（输入、提交、取消）
pub fn update(app: &mut App, msg: FormMessage) {
    if !app.vessels.show_form || app.vessels.is_loading() {
        return;
    }

    match msg {
        FormMessage::Input(c) => app.form.input(c),
        FormMessage::Backspace => app.form.backspace(),
        FormMessage::NextField => app.form.next_field(),
        FormMessage::PrevField => app.form.prev_field(),
        FormMessage::Submit => {
            if let Some(body) = app.form.submit() {
                app.dispatch(OperationKind::Create, |ticket| Command::Create(ticket, body));
            }
        }
        FormMessage::Cancel => super::cancel_form(app),
    }
}
