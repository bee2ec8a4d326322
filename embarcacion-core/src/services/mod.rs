//! 业务逻辑服务层

mod vessel_service;

pub use vessel_service::{MutationOutcome, VesselService};

use std::sync::Arc;

use embarcacion_provider::VesselApi;

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入 [`VesselApi`] 实现。
pub struct ServiceContext {
    /// 船只资源服务
    pub api: Arc<dyn VesselApi>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(api: Arc<dyn VesselApi>) -> Self {
        Self { api }
    }
}
