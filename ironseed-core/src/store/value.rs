//! JSON <-> Firestore typed-value conversion
//!
//! Firestore's REST API wraps every field in a one-key object naming its
//! type. Integers travel as decimal strings.
//!
//! ```
//! use serde_json::json;
//! use ironseed_core::store::value::encode_value;
//!
//! assert_eq!(encode_value(&json!(5)), json!({"integerValue": "5"}));
//! assert_eq!(encode_value(&json!(["a"])), json!({"arrayValue": {"values": [{"stringValue": "a"}]}}));
//! ```

use serde_json::{json, Map, Number, Value};

use crate::error::{Result, SeedError};

/// Encode one JSON value as a Firestore `Value`
pub fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                json!({ "integerValue": i.to_string() })
            } else if let Some(u) = n.as_u64() {
                json!({ "integerValue": u.to_string() })
            } else {
                json!({ "doubleValue": n.as_f64().unwrap_or_default() })
            }
        }
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            if items.is_empty() {
                json!({ "arrayValue": {} })
            } else {
                let values: Vec<Value> = items.iter().map(encode_value).collect();
                json!({ "arrayValue": { "values": values } })
            }
        }
        Value::Object(map) => json!({ "mapValue": { "fields": encode_fields(map) } }),
    }
}

/// Encode a document's top-level fields
pub fn encode_fields(fields: &Map<String, Value>) -> Map<String, Value> {
    fields
        .iter()
        .map(|(name, value)| (name.clone(), encode_value(value)))
        .collect()
}

/// Decode a Firestore `Value` back into plain JSON
pub fn decode_value(value: &Value) -> Result<Value> {
    let (kind, inner) = value
        .as_object()
        .filter(|map| map.len() == 1)
        .and_then(|map| map.iter().next())
        .ok_or_else(|| SeedError::Serialization(format!("Not a typed value: {}", value)))?;

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" => inner
            .as_bool()
            .map(Value::Bool)
            .ok_or_else(|| mismatch(kind, inner)),
        "integerValue" => {
            let parsed = match inner {
                Value::String(s) => s.parse::<i64>().ok(),
                Value::Number(n) => n.as_i64(),
                _ => None,
            };
            parsed
                .map(|i| Value::Number(i.into()))
                .ok_or_else(|| mismatch(kind, inner))
        }
        "doubleValue" => inner
            .as_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| mismatch(kind, inner)),
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => inner
            .as_str()
            .map(|s| Value::String(s.to_string()))
            .ok_or_else(|| mismatch(kind, inner)),
        "arrayValue" => {
            let values = match inner.get("values") {
                Some(Value::Array(values)) => values,
                Some(other) => return Err(mismatch(kind, other)),
                None => return Ok(Value::Array(Vec::new())),
            };
            values
                .iter()
                .map(decode_value)
                .collect::<Result<Vec<_>>>()
                .map(Value::Array)
        }
        "mapValue" => match inner.get("fields") {
            Some(Value::Object(fields)) => decode_fields(fields).map(Value::Object),
            Some(other) => Err(mismatch(kind, other)),
            None => Ok(Value::Object(Map::new())),
        },
        other => Err(SeedError::Serialization(format!(
            "Unsupported value type: {}",
            other
        ))),
    }
}

/// Decode a `fields` map from a Firestore document
pub fn decode_fields(fields: &Map<String, Value>) -> Result<Map<String, Value>> {
    fields
        .iter()
        .map(|(name, value)| Ok((name.clone(), decode_value(value)?)))
        .collect()
}

fn mismatch(kind: &str, inner: &Value) -> SeedError {
    SeedError::Serialization(format!("Bad payload for {}: {}", kind, inner))
}
