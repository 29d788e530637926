use serde_json::Value;

pub const CONTENT_TYPE: &str = "application/json";

/// String form of a JSON value as it appears in URLs and templated text:
/// strings are emitted without quotes, everything else as compact JSON.
pub fn plain_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Pretty-prints a response body when it parses as JSON.
pub fn pretty_body(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    serde_json::to_string_pretty(&value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_string() {
        assert_eq!(plain_string(&json!("abc")), "abc");
        assert_eq!(plain_string(&json!(42)), "42");
        assert_eq!(plain_string(&json!(1.5)), "1.5");
        assert_eq!(plain_string(&json!(true)), "true");
        assert_eq!(plain_string(&json!(null)), "null");
        assert_eq!(plain_string(&json!({"a": 1})), r#"{"a":1}"#);
    }

    #[test]
    fn test_pretty_body() {
        assert_eq!(
            pretty_body(br#"{"a":1}"#).as_deref(),
            Some("{\n  \"a\": 1\n}")
        );
        assert_eq!(pretty_body(b"not json"), None);
    }
}
