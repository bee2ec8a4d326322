//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use embarcacion_provider::{ApiConfig, NewVessel, VesselApi, create_api};

pub mod stub_server;

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_server {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成唯一的测试船名
pub fn generate_test_vessel_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// 测试用的新船只
pub fn sample_vessel() -> NewVessel {
    NewVessel {
        name: generate_test_vessel_name(),
        capacity: 12.0,
        description: "integration-test".to_string(),
        scheduled_date: None,
    }
}

/// 测试上下文
pub struct TestContext {
    pub api: Arc<dyn VesselApi>,
}

impl TestContext {
    /// 从 `EMBARCACION_API_URL` 创建
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("EMBARCACION_API_URL").ok()?;
        let api = create_api(&ApiConfig::new(base_url)).ok()?;
        Some(Self { api })
    }

    /// 清理测试记录
    pub async fn cleanup_vessel(&self, id: i64) {
        let _ = self.api.delete_vessel(id).await;
    }

    /// 查找并清理所有测试记录（名称以 _test- 开头）
    pub async fn cleanup_all_test_vessels(&self) {
        if let Ok(vessels) = self.api.list_vessels().await {
            for vessel in vessels {
                if vessel.name.starts_with("_test-") {
                    let _ = self.api.delete_vessel(vessel.id).await;
                }
            }
        }
    }
}
