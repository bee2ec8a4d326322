//! 日期序列化/反序列化工具
//!
//! 提供 `fecha` 字段的 Serde 支持：
//! - 序列化: `NaiveDate` -> `YYYY-MM-DD` 字符串
//! - 反序列化: `YYYY-MM-DD`、RFC3339 字符串 或 Unix 时间戳 -> `NaiveDate`

use chrono::{DateTime, NaiveDate, Utc};

/// 日期在线上的格式
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 宽松解析服务端返回的日期字符串
///
/// 先按 `YYYY-MM-DD` 解析，失败时再按 RFC3339 解析并取 UTC 日期部分。
pub fn parse_date_str(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok().or_else(|| {
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    })
}

/// 解析 Unix 时间戳（自动判断秒/毫秒）
fn parse_unix_timestamp(ts: i64) -> Option<NaiveDate> {
    // > 10^11 视为毫秒
    let dt = if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    };
    dt.map(|dt| dt.date_naive())
}

/// `Option<NaiveDate>` 的 serde with-module
pub mod option {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{DATE_FORMAT, parse_date_str, parse_unix_timestamp};

    /// 序列化 `Option<NaiveDate>` 为 `Option<YYYY-MM-DD>`
    #[allow(clippy::ref_option)]
    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_some(&date.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    /// 反序列化：支持日期字符串、RFC3339 字符串或 Unix 时间戳
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum OptionalDate {
            String(String),
            I64(i64),
        }

        match Option::<OptionalDate>::deserialize(deserializer)? {
            Some(OptionalDate::String(s)) if s.trim().is_empty() => Ok(None),
            Some(OptionalDate::String(s)) => parse_date_str(&s)
                .map(Some)
                .ok_or_else(|| Error::custom(format!("Invalid date: {s}"))),
            Some(OptionalDate::I64(ts)) => parse_unix_timestamp(ts)
                .map(Some)
                .ok_or_else(|| Error::custom("Invalid Unix timestamp")),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Holder {
        #[serde(default, with = "crate::utils::datetime::option")]
        fecha: Option<NaiveDate>,
    }

    #[test]
    fn parses_plain_date() {
        assert_eq!(
            parse_date_str("2024-02-29"),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }

    #[test]
    fn rejects_impossible_date() {
        assert_eq!(parse_date_str("2023-02-29"), None);
        assert_eq!(parse_date_str("mañana"), None);
    }

    #[test]
    fn parses_rfc3339_as_utc_date() {
        assert_eq!(
            parse_date_str("2024-05-01T23:30:00-03:00"),
            NaiveDate::from_ymd_opt(2024, 5, 2)
        );
    }

    #[test]
    fn deserializes_seconds_and_millis() {
        let secs: Holder = serde_json::from_str(r#"{"fecha":1714521600}"#).unwrap();
        let millis: Holder = serde_json::from_str(r#"{"fecha":1714521600000}"#).unwrap();
        assert_eq!(secs.fecha, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(millis.fecha, secs.fecha);
    }

    #[test]
    fn null_and_empty_become_none() {
        let null: Holder = serde_json::from_str(r#"{"fecha":null}"#).unwrap();
        let empty: Holder = serde_json::from_str(r#"{"fecha":""}"#).unwrap();
        let missing: Holder = serde_json::from_str("{}").unwrap();
        assert!(null.fecha.is_none());
        assert!(empty.fecha.is_none());
        assert!(missing.fecha.is_none());
    }

    #[test]
    fn serializes_date_only() {
        let h = Holder {
            fecha: NaiveDate::from_ymd_opt(2025, 12, 24),
        };
        assert_eq!(serde_json::to_string(&h).unwrap(), r#"{"fecha":"2025-12-24"}"#);
    }
}
