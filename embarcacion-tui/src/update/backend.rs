//! 远程操作结果处理
//!
//! 规则：
//! - 成功只清除更早票据的横幅
//! - 创建 / 删除 / 获取失败设置横幅；更新失败只记录日志
//! - 变更成功但随后的整表获取失败时，以变更的票据设置“获取失败”横幅

use embarcacion_core::CoreResult;
use embarcacion_core::types::{OperationKind, Vessel};

use crate::message::BackendMessage;
use crate::model::{App, OperationTicket};

pub fn update(app: &mut App, msg: BackendMessage) {
    let ticket = msg.ticket();
    app.vessels.settle(ticket);

    match msg {
        BackendMessage::Fetched { result, .. } => apply_fetch(app, ticket, result),

        BackendMessage::Created { result, .. } => match result {
            Ok(outcome) => {
                app.vessels.clear_banner_before(ticket);
                apply_fetch(app, ticket, outcome.refreshed);
                app.form.on_create_succeeded();
                app.vessels.close_form();
            }
            Err(_) => {
                app.form.on_create_failed();
                app.vessels.raise(ticket, OperationKind::Create);
            }
        },

        BackendMessage::Updated { id, result, .. } => match result {
            Ok(outcome) => {
                app.table.on_update_succeeded(id);
                app.vessels.clear_banner_before(ticket);
                apply_fetch(app, ticket, outcome.refreshed);
            }
            Err(e) => {
                tracing::debug!("Inline edit of vessel {id} kept open after failure: {e}");
                app.table.on_update_failed(id);
            }
        },

        BackendMessage::Deleted { id, result, .. } => match result {
            Ok(outcome) => {
                app.table.on_delete_succeeded(id);
                app.vessels.clear_banner_before(ticket);
                apply_fetch(app, ticket, outcome.refreshed);
            }
            Err(_) => {
                app.table.on_delete_failed();
                app.vessels.raise(ticket, OperationKind::Delete);
            }
        },
    }
}

fn apply_fetch(app: &mut App, ticket: OperationTicket, result: CoreResult<Vec<Vessel>>) {
    match result {
        Ok(vessels) => {
            app.vessels.replace_list(ticket, vessels);
            app.table.sync(&app.vessels.vessels);
        }
        Err(_) => app.vessels.raise(ticket, OperationKind::Fetch),
    }
}
