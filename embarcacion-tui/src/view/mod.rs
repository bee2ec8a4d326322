//! src/view/mod.rs
//! View 层：根据 App 渲染界面，只读不写
//!
//!     ┌──────────────────────────────────────────────┐
//!     │ 标题栏                                       │  layout.rs
//!     ├──────────────────────────────────────────────┤
//!     │ 横幅（有错误时）                             │  pages/vessels.rs
//!     │ [Alt+n] Nueva Embarcación / Cancelar         │
//!     │ ┌ 创建表单（可隐藏）─────────────────────┐   │  components/form.rs
//!     │ └────────────────────────────────────────┘   │
//!     │ ┌ 船只表格 ──────────────────────────────┐   │  components/vessel_table.rs
//!     │ └────────────────────────────────────────┘   │
//!     ├──────────────────────────────────────────────┤
//!     │ 状态栏：快捷键提示                           │  components/statusbar.rs
//!     └──────────────────────────────────────────────┘
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
