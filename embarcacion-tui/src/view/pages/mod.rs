//! 页面

pub mod vessels;
