//! Typed scalar codec: store strings ↔ YAML scalars.
//!
//! The store only holds strings, so types are recovered by trial parsing in
//! a fixed order. A string that merely looks like another type ("true"
//! stored intentionally as text) cannot be told apart from the real thing;
//! that lossy boundary is accepted.

use serde_yaml::Value;

/// Decode a raw store string into a typed scalar.
///
/// Trial order: bool ("true"/"false" exactly), then i64, then f64, then the
/// original string. The first successful parse wins. Total — every input has
/// at least the string fallback.
pub fn decode(raw: &str) -> Value {
    let trimmed = raw.trim();
    if let Ok(b) = trimmed.parse::<bool>() {
        return Value::Bool(b);
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::Number(i.into());
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        return Value::Number(f.into());
    }
    Value::String(raw.to_string())
}

/// Stringify a scalar for upload: integers without a decimal point, floats in
/// their minimal form, booleans as "true"/"false", null as "null".
///
/// Containers should never reach here (the flattener stops at scalars); they
/// fall back to their YAML rendering so the function stays total.
pub fn encode(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Tagged(tagged) => encode(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => serde_yaml::to_string(value)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
