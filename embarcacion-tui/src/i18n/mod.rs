//! 国际化（i18n）模块
//!
//! 使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。
//! 默认语言为西班牙语，与服务端数据的语言一致。

use std::sync::atomic::{AtomicUsize, Ordering};

use embarcacion_core::types::VesselField;
use embarcacion_core::validation::FieldError;

mod en_us;
mod es_es;
pub mod keys;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 西班牙语（西班牙）
    #[default]
    EsEs,
    /// 英语（美国）
    EnUs,
}

impl Language {
    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::EsEs => "es-ES",
            Language::EnUs => "en-US",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "es-ES" | "es" => Some(Language::EsEs),
            "en-US" | "en" => Some(Language::EnUs),
            _ => None,
        }
    }
}

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EsEs

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &en_us::TRANSLATIONS,
        _ => &es_es::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    let index = match lang {
        Language::EsEs => 0,
        Language::EnUs => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

/// 字段标签
pub fn field_label(field: VesselField) -> &'static str {
    let form = &t().form;
    match field {
        VesselField::Name => form.name,
        VesselField::Capacity => form.capacity,
        VesselField::Description => form.description,
        VesselField::ScheduledDate => form.scheduled_date,
    }
}

/// 字段错误提示
pub fn field_error_text(field: VesselField, error: FieldError) -> &'static str {
    let form = &t().form;
    match (field, error) {
        (VesselField::Name, _) => form.name_required,
        (VesselField::Capacity, _) => form.capacity_invalid,
        (VesselField::Description, _) => form.description_required,
        (VesselField::ScheduledDate, FieldError::Required) => form.date_required,
        (VesselField::ScheduledDate, FieldError::Invalid) => form.date_invalid,
    }
}
