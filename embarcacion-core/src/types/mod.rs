//! 类型定义模块

mod draft;
mod operation;
mod schema;

pub use draft::{VesselDraft, today};
pub use operation::OperationKind;
pub use schema::{RecordSchema, VesselField};

// Re-export provider 库的公共类型
pub use embarcacion_provider::{NewVessel, Vessel};
