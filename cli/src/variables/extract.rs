use serde_json::Value;
use std::collections::BTreeMap;

/// Walks a dotted path such as `data.items.0.token`. Components index objects
/// by key and arrays by position.
pub fn deep_get<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, part| match current {
        Value::Object(map) => map.get(part),
        Value::Array(items) => part.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

#[derive(Debug, Default, PartialEq)]
pub struct Extraction {
    /// Variable name and captured value.
    pub captured: Vec<(String, Value)>,
    /// Variable name and the path that did not resolve.
    pub missing: Vec<(String, String)>,
}

/// Applies `variable -> path` bindings to a response body. Returns `None` when
/// the body is not JSON. Each binding succeeds or fails on its own.
pub fn extract_bindings(body: &[u8], bindings: &BTreeMap<String, String>) -> Option<Extraction> {
    let json: Value = serde_json::from_slice(body).ok()?;

    let mut extraction = Extraction::default();
    for (name, path) in bindings {
        match deep_get(&json, path) {
            Some(value) => extraction.captured.push((name.clone(), value.clone())),
            None => extraction.missing.push((name.clone(), path.clone())),
        }
    }
    Some(extraction)
}
