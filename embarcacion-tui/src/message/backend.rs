//! 远程操作结果消息

use embarcacion_core::types::Vessel;
use embarcacion_core::{CoreResult, MutationOutcome};

use crate::model::OperationTicket;

/// 后台任务完成后经通道发回主循环的结果
#[derive(Debug, Clone)]
pub enum BackendMessage {
    Fetched {
        ticket: OperationTicket,
        result: CoreResult<Vec<Vessel>>,
    },
    Created {
        ticket: OperationTicket,
        result: CoreResult<MutationOutcome<Vessel>>,
    },
    Updated {
        ticket: OperationTicket,
        id: i64,
        result: CoreResult<MutationOutcome>,
    },
    Deleted {
        ticket: OperationTicket,
        id: i64,
        result: CoreResult<MutationOutcome>,
    },
}

impl BackendMessage {
    pub fn ticket(&self) -> OperationTicket {
        match self {
            Self::Fetched { ticket, .. }
            | Self::Created { ticket, .. }
            | Self::Updated { ticket, .. }
            | Self::Deleted { ticket, .. } => *ticket,
        }
    }
}
