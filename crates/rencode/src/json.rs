//! JSON adapter — the boundary between JSON text and the rencode [`Value`]
//! model. The codec itself only ever sees `Value`; everything JSON-specific
//! (text vs. binary, number classification, key stringification) lives here.

use base64::prelude::*;
use serde_json::Value as Json;

use crate::encoder::FloatBits;
use crate::error::RencodeError;
use crate::value::Value;

/// Prefix used to carry binary payloads through JSON strings.
const BINARY_URI_PREFIX: &str = "data:application/octet-stream;base64,";

/// Converts a JSON value into the generic rencode value model.
///
/// Numbers become `Int` when they fit `i64`, `BigInt` for `u64` values
/// beyond `i64::MAX`, and otherwise a float at the requested precision.
/// Strings become `Bytes`; object member order is preserved.
pub fn from_json(json: &Json, float_bits: FloatBits) -> Value {
    match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else if let Some(u) = n.as_u64() {
                Value::BigInt(u.to_string())
            } else {
                let f = n.as_f64().unwrap_or(0.0);
                match float_bits {
                    FloatBits::F32 => Value::Float32(f as f32),
                    FloatBits::F64 => Value::Float64(f),
                }
            }
        }
        Json::String(s) => Value::str(s),
        Json::Array(items) => Value::List(
            items
                .iter()
                .map(|item| from_json(item, float_bits))
                .collect(),
        ),
        Json::Object(members) => Value::Map(
            members
                .iter()
                .map(|(k, v)| (Value::str(k), from_json(v, float_bits)))
                .collect(),
        ),
    }
}

/// Converts a decoded value back into JSON.
///
/// `Bytes` become text when valid UTF-8 and a base64 data URI otherwise.
/// Map keys must be strings or integers; duplicate keys overwrite in
/// insertion order. Non-finite floats have no JSON representation and are
/// rejected.
pub fn to_json(value: &Value) -> Result<Json, RencodeError> {
    match value {
        Value::Null => Ok(Json::Null),
        Value::Bool(b) => Ok(Json::Bool(*b)),
        Value::Int(i) => Ok(Json::from(*i)),
        Value::BigInt(digits) => Ok(if let Ok(n) = digits.parse::<i64>() {
            Json::from(n)
        } else if let Ok(n) = digits.parse::<u64>() {
            Json::from(n)
        } else {
            // Beyond what a JSON number can carry losslessly here.
            Json::String(digits.clone())
        }),
        Value::Float32(f) => float_to_json(*f as f64),
        Value::Float64(f) => float_to_json(*f),
        Value::Bytes(b) => Ok(Json::String(bytes_to_string(b))),
        Value::List(items) => Ok(Json::Array(
            items.iter().map(to_json).collect::<Result<_, _>>()?,
        )),
        Value::Map(pairs) => {
            let mut members = serde_json::Map::new();
            for (key, value) in pairs {
                members.insert(key_to_string(key)?, to_json(value)?);
            }
            Ok(Json::Object(members))
        }
    }
}

fn float_to_json(f: f64) -> Result<Json, RencodeError> {
    serde_json::Number::from_f64(f)
        .map(Json::Number)
        .ok_or(RencodeError::UnsupportedValueType(
            "non-finite float has no JSON representation",
        ))
}

fn bytes_to_string(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_owned(),
        Err(_) => format!("{}{}", BINARY_URI_PREFIX, BASE64_STANDARD.encode(bytes)),
    }
}

fn key_to_string(key: &Value) -> Result<String, RencodeError> {
    match key {
        Value::Bytes(b) => Ok(bytes_to_string(b)),
        Value::Int(i) => Ok(i.to_string()),
        Value::BigInt(digits) => Ok(digits.clone()),
        _ => Err(RencodeError::UnsupportedValueType(
            "JSON object keys must be strings or integers",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn primitives_map_directly() {
        assert_eq!(from_json(&json!(null), FloatBits::F64), Value::Null);
        assert_eq!(from_json(&json!(true), FloatBits::F64), Value::Bool(true));
        assert_eq!(from_json(&json!(42), FloatBits::F64), Value::Int(42));
        assert_eq!(from_json(&json!("hi"), FloatBits::F64), Value::str("hi"));
    }

    #[test]
    fn float_precision_follows_the_call() {
        assert_eq!(
            from_json(&json!(1.5), FloatBits::F32),
            Value::Float32(1.5)
        );
        assert_eq!(
            from_json(&json!(1.5), FloatBits::F64),
            Value::Float64(1.5)
        );
    }

    #[test]
    fn u64_beyond_i64_becomes_big_int() {
        let big = u64::MAX;
        assert_eq!(
            from_json(&json!(big), FloatBits::F64),
            Value::BigInt(big.to_string())
        );
        // And converts back as a number, not a string.
        let back = to_json(&Value::BigInt(big.to_string())).unwrap();
        assert_eq!(back, json!(big));
    }

    #[test]
    fn big_int_beyond_u64_stays_a_string() {
        let digits = "9".repeat(40);
        let back = to_json(&Value::BigInt(digits.clone())).unwrap();
        assert_eq!(back, Json::String(digits));
    }

    #[test]
    fn object_order_is_preserved() {
        let json = json!({"z": 1, "a": 2});
        let value = from_json(&json, FloatBits::F64);
        assert_eq!(
            value,
            Value::Map(vec![
                (Value::str("z"), Value::Int(1)),
                (Value::str("a"), Value::Int(2)),
            ])
        );
        assert_eq!(to_json(&value).unwrap(), json);
    }

    #[test]
    fn binary_bytes_become_a_data_uri() {
        let json = to_json(&Value::Bytes(vec![0xde, 0xad, 0xbe, 0xef])).unwrap();
        let Json::String(s) = json else {
            panic!("expected string")
        };
        assert!(s.starts_with(BINARY_URI_PREFIX));
    }

    #[test]
    fn integer_keys_are_stringified() {
        let value = Value::Map(vec![(Value::Int(7), Value::Bool(true))]);
        assert_eq!(to_json(&value).unwrap(), json!({"7": true}));
    }

    #[test]
    fn unrepresentable_keys_are_rejected() {
        let value = Value::Map(vec![(Value::List(vec![]), Value::Null)]);
        assert!(matches!(
            to_json(&value),
            Err(RencodeError::UnsupportedValueType(_))
        ));
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        assert!(to_json(&Value::Float64(f64::NAN)).is_err());
        assert!(to_json(&Value::Float32(f32::INFINITY)).is_err());
    }

    #[test]
    fn duplicate_map_keys_overwrite_in_insertion_order() {
        let value = Value::Map(vec![
            (Value::str("k"), Value::Int(1)),
            (Value::str("k"), Value::Int(2)),
        ]);
        assert_eq!(to_json(&value).unwrap(), json!({"k": 2}));
    }
}
