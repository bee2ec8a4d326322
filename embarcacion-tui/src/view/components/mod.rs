//! 组件

pub mod form;
pub mod statusbar;
pub mod vessel_table;
