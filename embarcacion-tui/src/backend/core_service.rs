//! 核心服务
//!
//! 封装 embarcacion-core 的 `VesselService`，把 Update 层产出的 `Command`
//! 放到 tokio 运行时上执行，结果经 mpsc 通道发回主循环。

use std::sync::Arc;

use embarcacion_core::{ServiceContext, VesselService};
use embarcacion_provider::VesselApi;
use tokio::sync::mpsc::UnboundedSender;

use crate::message::BackendMessage;
use crate::model::Command;

/// TUI 核心服务
pub struct CoreService {
    vessels: Arc<VesselService>,
    tx: UnboundedSender<BackendMessage>,
}

impl CoreService {
    /// 创建核心服务实例
    pub fn new(api: Arc<dyn VesselApi>, tx: UnboundedSender<BackendMessage>) -> Self {
        let ctx = Arc::new(ServiceContext::new(api));
        Self {
            vessels: Arc::new(VesselService::new(ctx)),
            tx,
        }
    }

    /// 派发命令；需在 tokio 运行时上下文中调用
    pub fn execute(&self, command: Command) {
        let service = Arc::clone(&self.vessels);
        let tx = self.tx.clone();
        tracing::debug!("Dispatching {:?}", command.ticket());

        tokio::spawn(async move {
            let msg = match command {
                Command::Fetch(ticket) => BackendMessage::Fetched {
                    ticket,
                    result: service.fetch_all().await,
                },
                Command::Create(ticket, body) => BackendMessage::Created {
                    ticket,
                    result: service.create(&body).await,
                },
                Command::Update(ticket, record) => BackendMessage::Updated {
                    ticket,
                    id: record.id,
                    result: service.update(&record).await,
                },
                Command::Delete(ticket, id) => BackendMessage::Deleted {
                    ticket,
                    id,
                    result: service.delete(id).await,
                },
            };
            // 主循环已退出时接收端关闭，结果直接丢弃
            if tx.send(msg).is_err() {
                tracing::debug!("UI loop gone, dropping backend result");
            }
        });
    }
}
