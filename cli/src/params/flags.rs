use crate::core::logger::Logger;
use crate::environment::accessor::parse_bool;
use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// Flag name -> typed value, as typed on the command line.
pub type FlagMap = BTreeMap<String, Value>;

/// Parses the tokens that follow the endpoint name.
///
/// Accepts `--name=value`, `--name value`, `-n value` and `-n=value`. A flag
/// with no value token after it is `true`.
pub fn parse_flags(args: &[String]) -> FlagMap {
    let mut flags = FlagMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];
        i += 1;

        let Some(name) = flag_name(arg) else {
            Logger::debug(&format!("Ignoring positional argument '{arg}'"));
            continue;
        };

        if let Some((key, raw)) = name.split_once('=') {
            if !key.is_empty() {
                flags.insert(key.to_string(), parse_value(raw));
            }
            continue;
        }

        if name.is_empty() {
            continue;
        }

        match args.get(i) {
            Some(next) if flag_name(next).is_none() => {
                flags.insert(name.to_string(), parse_value(next));
                i += 1;
            }
            _ => {
                flags.insert(name.to_string(), Value::Bool(true));
            }
        }
    }

    flags
}

/// `--name` / `-n` without the dashes. Negative numbers are values, not flags.
fn flag_name(token: &str) -> Option<&str> {
    if !token.starts_with('-') || is_number(token) {
        return None;
    }
    Some(
        token
            .strip_prefix("--")
            .or_else(|| token.strip_prefix('-'))
            .unwrap_or(token),
    )
}

fn is_number(token: &str) -> bool {
    token.parse::<i64>().is_ok() || token.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Tries int, then float, then bool, and falls back to the raw string.
pub fn parse_value(raw: &str) -> Value {
    if let Ok(i) = raw.parse::<i64>() {
        return Value::from(i);
    }
    if let Some(n) = raw.parse::<f64>().ok().and_then(Number::from_f64) {
        return Value::Number(n);
    }
    if let Some(b) = parse_bool(raw) {
        return Value::Bool(b);
    }
    Value::String(raw.to_string())
}
