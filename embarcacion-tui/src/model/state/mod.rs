//! 页面状态

mod creation_form;
mod inline_table;
mod vessels;

pub use creation_form::{CreationForm, FormPhase};
pub use inline_table::{RowEdit, RowMode, VesselTable};
pub use vessels::{OperationTicket, VesselsState};
