//! 字段校验与数值转换
//!
//! 容量字段的文本转换遵循浏览器 `Number()` 的规则：
//! - 去掉首尾空白后为空 → `0`
//! - 十进制（可带符号、小数点、指数）
//! - `0x` / `0o` / `0b` 前缀整数（不可带符号）
//! - `Infinity`（可带符号）
//! - 其余一律视为非数字

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::{NewVessel, RecordSchema, VesselDraft, VesselField};

/// 日期文本格式
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 单个字段的错误类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldError {
    /// 必填字段为空
    Required,
    /// 有内容但不合法
    Invalid,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => f.write_str("required"),
            Self::Invalid => f.write_str("invalid"),
        }
    }
}

/// 校验结果：字段 → 错误
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    errors: BTreeMap<VesselField, FieldError>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn get(&self, field: VesselField) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn insert(&mut self, field: VesselField, error: FieldError) {
        self.errors.insert(field, error);
    }

    /// 清除单个字段的错误（输入时调用）
    pub fn clear(&mut self, field: VesselField) {
        self.errors.remove(&field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (VesselField, FieldError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (field, error)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {error}")?;
        }
        Ok(())
    }
}

/// 校验草稿；所有规则每次都会执行
#[must_use]
pub fn validate(draft: &VesselDraft, schema: RecordSchema) -> ValidationReport {
    let mut report = ValidationReport::default();

    if draft.name.trim().is_empty() {
        report.insert(VesselField::Name, FieldError::Required);
    }

    let capacity_ok = !draft.capacity.is_empty()
        && coerce_number(&draft.capacity).is_some_and(|n| n > 0.0);
    if !capacity_ok {
        report.insert(VesselField::Capacity, FieldError::Invalid);
    }

    if draft.description.trim().is_empty() {
        report.insert(VesselField::Description, FieldError::Required);
    }

    if schema.has_scheduled_date() {
        if draft.scheduled_date.trim().is_empty() {
            report.insert(VesselField::ScheduledDate, FieldError::Required);
        } else if parse_date(&draft.scheduled_date).is_none() {
            report.insert(VesselField::ScheduledDate, FieldError::Invalid);
        }
    }

    report
}

/// 校验并转换为创建请求体
pub fn build_new_vessel(
    draft: &VesselDraft,
    schema: RecordSchema,
) -> Result<NewVessel, ValidationReport> {
    let report = validate(draft, schema);
    if !report.is_valid() {
        return Err(report);
    }

    let capacity = coerce_number(&draft.capacity).unwrap_or_default();
    let scheduled_date = if schema.has_scheduled_date() {
        parse_date(&draft.scheduled_date)
    } else {
        None
    };

    Ok(NewVessel {
        name: draft.name.clone(),
        capacity,
        description: draft.description.clone(),
        scheduled_date,
    })
}

/// 严格解析 `YYYY-MM-DD`
#[must_use]
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    let bytes = text.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

/// 文本 → 数字；`None` 表示非数字
#[must_use]
pub fn coerce_number(text: &str) -> Option<f64> {
    let s = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if s.is_empty() {
        return Some(0.0);
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    let (negative, unsigned) = match s.as_bytes()[0] {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let magnitude = if unsigned == "Infinity" {
        f64::INFINITY
    } else if is_decimal_literal(unsigned) {
        unsigned.parse::<f64>().ok()?
    } else {
        return None;
    };

    Some(if negative { -magnitude } else { magnitude })
}

/// 数字 → 文本（整数不带小数点）
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else {
        format!("{value}")
    }
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// 无符号十进制字面量：`1`、`1.`、`.5`、`1.5e-3`
fn is_decimal_literal(s: &str) -> bool {
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(i) => (&s[..i], Some(&s[i + 1..])),
        None => (s, None),
    };

    let mantissa_ok = mantissa.bytes().any(|b| b.is_ascii_digit())
        && mantissa.bytes().filter(|b| *b == b'.').count() <= 1
        && mantissa.bytes().all(|b| b.is_ascii_digit() || b == b'.');

    let exponent_ok = exponent.is_none_or(|e| {
        let e = e.strip_prefix(['+', '-']).unwrap_or(e);
        !e.is_empty() && e.bytes().all(|b| b.is_ascii_digit())
    });

    mantissa_ok && exponent_ok
}
