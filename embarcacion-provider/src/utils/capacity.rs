//! `capacidad` 字段的 Serde 支持
//!
//! 服务端可能返回整数、小数或数字字符串；整数值写回时不带小数点。

use serde::{Deserialize, Deserializer, Serializer};

/// 可以无损写成 JSON 整数的最大绝对值（2^53）
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// 序列化：整数值写为 JSON 整数，其余写为浮点数
#[allow(clippy::trivially_copy_pass_by_ref, clippy::cast_possible_truncation)]
pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// 反序列化：支持 JSON 数字或数字字符串
pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| Error::custom(format!("Invalid capacity '{s}': {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Holder {
        #[serde(with = "crate::utils::capacity")]
        capacidad: f64,
    }

    #[test]
    fn integral_values_serialize_without_fraction() {
        let json = serde_json::to_string(&Holder { capacidad: 40.0 }).unwrap();
        assert_eq!(json, r#"{"capacidad":40}"#);
    }

    #[test]
    fn fractional_values_keep_fraction() {
        let json = serde_json::to_string(&Holder { capacidad: 0.5 }).unwrap();
        assert_eq!(json, r#"{"capacidad":0.5}"#);
    }

    #[test]
    fn accepts_numeric_string() {
        let h: Holder = serde_json::from_str(r#"{"capacidad":" 12 "}"#).unwrap();
        assert!((h.capacidad - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_non_numeric_string() {
        let r: Result<Holder, _> = serde_json::from_str(r#"{"capacidad":"doce"}"#);
        assert!(r.is_err());
    }
}
