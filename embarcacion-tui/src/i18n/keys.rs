//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 3. **错误横幅归 `banner.*`**：每种远程操作一条固定文本
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 页头文本（标题、新建按钮）
    pub header: HeaderTexts,
    /// 创建表单文本
    pub form: FormTexts,
    /// 表格文本
    pub table: TableTexts,
    /// 错误横幅文本
    pub banner: BannerTexts,
    /// 键盘提示
    pub hints: HintTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub confirm: &'static str,
    pub quit: &'static str,
    pub refresh: &'static str,
}

// ============================================================================
// 页头
// ============================================================================

pub struct HeaderTexts {
    /// 页面主标题
    pub title: &'static str,
    /// 表单隐藏时的切换按钮
    pub new_vessel: &'static str,
    /// 表单显示时的切换按钮
    pub hide_form: &'static str,
}

// ============================================================================
// 创建表单
// ============================================================================

pub struct FormTexts {
    pub title_new: &'static str,
    pub title_edit: &'static str,
    pub name: &'static str,
    pub capacity: &'static str,
    pub description: &'static str,
    pub scheduled_date: &'static str,
    pub submitting: &'static str,
    // 字段错误
    pub name_required: &'static str,
    pub capacity_invalid: &'static str,
    pub description_required: &'static str,
    pub date_required: &'static str,
    pub date_invalid: &'static str,
}

// ============================================================================
// 表格
// ============================================================================

pub struct TableTexts {
    pub title: &'static str,
    pub col_id: &'static str,
    pub col_name: &'static str,
    pub col_capacity: &'static str,
    pub col_description: &'static str,
    pub col_date: &'static str,
    pub col_actions: &'static str,
    pub loading: &'static str,
    pub empty: &'static str,
    /// 删除确认提示
    pub confirm_delete: &'static str,
    /// 行内编辑中的提示
    pub editing: &'static str,
    pub deleting: &'static str,
    pub saving: &'static str,
}

// ============================================================================
// 错误横幅
// ============================================================================

pub struct BannerTexts {
    pub fetch_failed: &'static str,
    pub create_failed: &'static str,
    pub delete_failed: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

pub struct HintTexts {
    pub keys: KeyNames,
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows_ud: &'static str,
}

/// 操作说明
pub struct ActionTexts {
    pub select: &'static str,
    pub next_field: &'static str,
    pub submit: &'static str,
    pub inline_edit: &'static str,
    pub open_in_form: &'static str,
    pub new_vessel: &'static str,
    pub focus_form: &'static str,
    pub focus_table: &'static str,
}
