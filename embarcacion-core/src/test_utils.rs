//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use embarcacion_provider::{NewVessel, ProviderError, Result, Vessel, VesselApi};
use tokio::sync::RwLock;

use crate::services::{ServiceContext, VesselService};
use crate::types::OperationKind;

const MOCK_NAME: &str = "mock";

/// 记录下来的 API 调用
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    List,
    Create(NewVessel),
    Update(Vessel),
    Delete(i64),
}

// ===== MockVesselApi =====

pub struct MockVesselApi {
    vessels: RwLock<Vec<Vessel>>,
    next_id: RwLock<i64>,
    calls: RwLock<Vec<ApiCall>>,
    /// 这些操作会返回网络错误
    failing: RwLock<HashSet<OperationKind>>,
}

impl MockVesselApi {
    pub fn new() -> Self {
        Self::with_vessels(Vec::new())
    }

    pub fn with_vessels(vessels: Vec<Vessel>) -> Self {
        let next_id = vessels.iter().map(|v| v.id).max().unwrap_or(0) + 1;
        Self {
            vessels: RwLock::new(vessels),
            next_id: RwLock::new(next_id),
            calls: RwLock::new(Vec::new()),
            failing: RwLock::new(HashSet::new()),
        }
    }

    pub async fn fail(&self, kind: OperationKind) {
        self.failing.write().await.insert(kind);
    }

    pub async fn calls(&self) -> Vec<ApiCall> {
        self.calls.read().await.clone()
    }

    async fn record(&self, call: ApiCall, kind: OperationKind) -> Result<()> {
        self.calls.write().await.push(call);
        if self.failing.read().await.contains(&kind) {
            return Err(ProviderError::NetworkError {
                provider: MOCK_NAME.to_string(),
                detail: format!("{kind} failed"),
            });
        }
        Ok(())
    }

    fn not_found(id: i64) -> ProviderError {
        ProviderError::RecordNotFound {
            provider: MOCK_NAME.to_string(),
            record_id: id.to_string(),
            raw_message: None,
        }
    }
}

#[async_trait]
impl VesselApi for MockVesselApi {
    fn id(&self) -> &'static str {
        MOCK_NAME
    }

    async fn list_vessels(&self) -> Result<Vec<Vessel>> {
        self.record(ApiCall::List, OperationKind::Fetch).await?;
        Ok(self.vessels.read().await.clone())
    }

    async fn create_vessel(&self, vessel: &NewVessel) -> Result<Vessel> {
        self.record(ApiCall::Create(vessel.clone()), OperationKind::Create)
            .await?;
        let mut next_id = self.next_id.write().await;
        let created = vessel.clone().with_id(*next_id);
        *next_id += 1;
        self.vessels.write().await.push(created.clone());
        Ok(created)
    }

    async fn update_vessel(&self, vessel: &Vessel) -> Result<()> {
        self.record(ApiCall::Update(vessel.clone()), OperationKind::Update)
            .await?;
        let mut vessels = self.vessels.write().await;
        let slot = vessels
            .iter_mut()
            .find(|v| v.id == vessel.id)
            .ok_or_else(|| Self::not_found(vessel.id))?;
        *slot = vessel.clone();
        Ok(())
    }

    async fn delete_vessel(&self, id: i64) -> Result<()> {
        self.record(ApiCall::Delete(id), OperationKind::Delete)
            .await?;
        let mut vessels = self.vessels.write().await;
        let before = vessels.len();
        vessels.retain(|v| v.id != id);
        if vessels.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}

// ===== 工厂方法 =====

/// 测试用船只记录
pub fn vessel(id: i64, name: &str) -> Vessel {
    Vessel {
        id,
        name: name.to_string(),
        capacity: 10.0,
        description: format!("descripcion {id}"),
        scheduled_date: None,
    }
}

/// 创建注入 mock 的服务
pub fn create_test_service(api: MockVesselApi) -> (VesselService, Arc<MockVesselApi>) {
    let api = Arc::new(api);
    let ctx = Arc::new(ServiceContext::new(api.clone()));
    (VesselService::new(ctx), api)
}
