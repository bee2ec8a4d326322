//! 待派发的远程操作
//!
//! Update 层只产生 `Command`，不直接做 I/O；主循环把它们交给 Backend 层。

use embarcacion_core::types::{NewVessel, Vessel};

use super::OperationTicket;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Fetch(OperationTicket),
    Create(OperationTicket, NewVessel),
    Update(OperationTicket, Vessel),
    Delete(OperationTicket, i64),
}

impl Command {
    pub fn ticket(&self) -> OperationTicket {
        match self {
            Command::Fetch(ticket)
            | Command::Create(ticket, _)
            | Command::Update(ticket, _)
            | Command::Delete(ticket, _) => *ticket,
        }
    }
}
