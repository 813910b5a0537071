use serde_json::Value;

/// First key that holds something string-like. Objects resolve through their `name`.
#[must_use]
pub fn pick_string(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| value.get(*key))
        .filter_map(as_string)
        .find(|s| !s.is_empty())
}

#[must_use]
pub fn pick_u32(value: &Value, keys: &[&str]) -> Option<u32> {
    for key in keys {
        if let Some(v) = value.get(*key) {
            if let Some(num) = v.as_u64() {
                return u32::try_from(num).ok();
            }
            if let Some(num) = v.as_str().and_then(|s| s.trim().parse::<u32>().ok()) {
                return Some(num);
            }
        }
    }
    None
}

/// Ratings and xG arrive both as numbers and as strings like "7.3".
#[must_use]
pub fn pick_f32(value: &Value, keys: &[&str]) -> Option<f32> {
    for key in keys {
        if let Some(v) = value.get(*key) {
            if let Some(num) = v.as_f64() {
                return Some(num as f32);
            }
            if let Some(num) = v.as_str().and_then(|s| s.trim().parse::<f32>().ok()) {
                return Some(num);
            }
        }
    }
    None
}

#[must_use]
pub fn pick_bool(value: &Value, keys: &[&str]) -> Option<bool> {
    keys.iter()
        .filter_map(|key| value.get(*key))
        .find_map(Value::as_bool)
}

#[must_use]
pub fn as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => map
            .get("name")
            .or_else(|| map.get("fullName"))
            .or_else(|| map.get("shortName"))
            .and_then(Value::as_str)
            .map(|s| s.trim().to_string()),
        _ => None,
    }
}

/// Empty slice when the path is missing or not an array.
#[must_use]
pub fn array_at<'a>(value: &'a Value, pointer: &str) -> &'a [Value] {
    value
        .pointer(pointer)
        .and_then(Value::as_array)
        .map_or(&[], Vec::as_slice)
}
