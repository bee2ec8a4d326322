//! 船只管理服务
//!
//! 每次变更（创建、更新、删除）成功后都会整表重新获取，不做本地增量修改。

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{NewVessel, RecordSchema, Vessel, VesselDraft};
use crate::validation::build_new_vessel;

/// 变更结果：变更本身已成功，附带随后的整表获取结果
#[derive(Debug, Clone)]
pub struct MutationOutcome<T = ()> {
    /// 变更返回值
    pub value: T,
    /// 变更后的整表获取；失败时为 `FetchFailed`
    pub refreshed: CoreResult<Vec<Vessel>>,
}

/// 船只管理服务
pub struct VesselService {
    ctx: Arc<ServiceContext>,
}

impl VesselService {
    /// 创建服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 获取全部记录
    pub async fn fetch_all(&self) -> CoreResult<Vec<Vessel>> {
        match self.ctx.api.list_vessels().await {
            Ok(vessels) => {
                log::debug!("Fetched {} vessels", vessels.len());
                Ok(vessels)
            }
            Err(e) => Err(Self::fail(CoreError::FetchFailed(e))),
        }
    }

    /// 创建记录，随后整表获取
    pub async fn create(&self, vessel: &NewVessel) -> CoreResult<MutationOutcome<Vessel>> {
        let created = self
            .ctx
            .api
            .create_vessel(vessel)
            .await
            .map_err(|e| Self::fail(CoreError::CreateFailed(e)))?;
        log::info!("Vessel {} created", created.id);

        Ok(MutationOutcome {
            value: created,
            refreshed: self.fetch_all().await,
        })
    }

    /// 校验草稿后创建；校验失败时不发起任何请求
    pub async fn create_from_draft(
        &self,
        draft: &VesselDraft,
        schema: RecordSchema,
    ) -> CoreResult<MutationOutcome<Vessel>> {
        let body = build_new_vessel(draft, schema).map_err(|report| {
            log::debug!("Draft rejected: {report}");
            CoreError::ValidationFailed(report)
        })?;
        self.create(&body).await
    }

    /// 以完整记录更新，随后整表获取
    pub async fn update(&self, vessel: &Vessel) -> CoreResult<MutationOutcome> {
        self.ctx
            .api
            .update_vessel(vessel)
            .await
            .map_err(|e| Self::fail(CoreError::UpdateFailed(e)))?;
        log::info!("Vessel {} updated", vessel.id);

        Ok(MutationOutcome {
            value: (),
            refreshed: self.fetch_all().await,
        })
    }

    /// 删除记录，随后整表获取
    pub async fn delete(&self, id: i64) -> CoreResult<MutationOutcome> {
        self.ctx
            .api
            .delete_vessel(id)
            .await
            .map_err(|e| Self::fail(CoreError::DeleteFailed(e)))?;
        log::info!("Vessel {id} deleted");

        Ok(MutationOutcome {
            value: (),
            refreshed: self.fetch_all().await,
        })
    }

    fn fail(err: CoreError) -> CoreError {
        err.log();
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ApiCall, MockVesselApi, create_test_service, vessel};
    use crate::types::{OperationKind, VesselField};
    use crate::validation::FieldError;
    use embarcacion_provider::ProviderError;

    fn draft(name: &str, capacity: &str, description: &str) -> VesselDraft {
        VesselDraft {
            name: name.to_string(),
            capacity: capacity.to_string(),
            description: description.to_string(),
            scheduled_date: String::new(),
        }
    }

    #[tokio::test]
    async fn create_then_list_round_trip() {
        let (service, api) = create_test_service(MockVesselApi::new());

        let outcome = service
            .create_from_draft(&draft("Lancha A", "12", "pesca"), RecordSchema::V1)
            .await
            .unwrap();
        let list = outcome.refreshed.unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, outcome.value.id);
        assert_eq!(list[0].name, "Lancha A");
        assert!((list[0].capacity - 12.0).abs() < f64::EPSILON);
        assert_eq!(list[0].description, "pesca");
        assert_eq!(api.calls().await.last(), Some(&ApiCall::List));
    }

    #[tokio::test]
    async fn fetch_all_is_idempotent() {
        let api = MockVesselApi::with_vessels(vec![vessel(1, "A"), vessel(2, "B")]);
        let (service, _api) = create_test_service(api);

        let first = service.fetch_all().await.unwrap();
        let second = service.fetch_all().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_entry() {
        let api = MockVesselApi::with_vessels(vec![vessel(1, "A"), vessel(5, "B"), vessel(7, "C")]);
        let (service, _api) = create_test_service(api);

        let list = service.delete(5).await.unwrap().refreshed.unwrap();
        let ids: Vec<i64> = list.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 7]);
    }

    #[tokio::test]
    async fn delete_unknown_id_fails_and_keeps_list() {
        let api = MockVesselApi::with_vessels(vec![vessel(1, "A")]);
        let (service, api) = create_test_service(api);

        let err = service.delete(42).await.unwrap_err();
        assert!(matches!(err, CoreError::DeleteFailed(ProviderError::RecordNotFound { .. })));
        assert!(err.is_expected());
        assert_eq!(service.fetch_all().await.unwrap().len(), 1);
        assert_eq!(api.calls().await, vec![ApiCall::Delete(42), ApiCall::List]);
    }

    #[tokio::test]
    async fn invalid_draft_makes_no_network_call() {
        let (service, api) = create_test_service(MockVesselApi::new());

        let err = service
            .create_from_draft(&draft("Lancha A", "-5", "pesca"), RecordSchema::V1)
            .await
            .unwrap_err();

        match err {
            CoreError::ValidationFailed(report) => {
                assert_eq!(report.len(), 1);
                assert_eq!(report.get(VesselField::Capacity), Some(FieldError::Invalid));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(api.calls().await.is_empty());
    }

    #[tokio::test]
    async fn update_sends_full_record_then_refreshes() {
        let api = MockVesselApi::with_vessels(vec![
            vessel(1, "A"),
            vessel(2, "B"),
            vessel(3, "C"),
        ]);
        let (service, api) = create_test_service(api);

        let mut edited = vessel(3, "C");
        edited.name = "Lancha B".to_string();
        let outcome = service.update(&edited).await.unwrap();

        let calls = api.calls().await;
        assert_eq!(calls, vec![ApiCall::Update(edited.clone()), ApiCall::List]);
        let ApiCall::Update(sent) = &calls[0] else {
            panic!("expected update call");
        };
        assert_eq!(sent.id, 3);
        assert_eq!(sent.capacity, vessel(3, "C").capacity);
        assert_eq!(sent.description, vessel(3, "C").description);
        assert_eq!(outcome.refreshed.unwrap()[2].name, "Lancha B");
    }

    #[tokio::test]
    async fn failed_create_skips_refresh() {
        let api = MockVesselApi::new();
        api.fail(OperationKind::Create).await;
        let (service, api) = create_test_service(api);

        let err = service
            .create(&vessel(0, "X").to_new())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::CreateFailed(_)), "{err:?}");
        assert_eq!(api.calls().await.len(), 1);
    }

    #[tokio::test]
    async fn refresh_failure_is_reported_separately() {
        let api = MockVesselApi::with_vessels(vec![vessel(1, "A")]);
        api.fail(OperationKind::Fetch).await;
        let (service, _api) = create_test_service(api);

        let outcome = service.delete(1).await.unwrap();
        assert!(matches!(outcome.refreshed, Err(CoreError::FetchFailed(_))));
    }
}
