use crate::core::logger::Logger;
#[cfg(test)]
use std::collections::HashMap;

/// Typed environment lookups. Each getter returns the value (or `fallback`)
/// and whether a usable value of the requested type was found.
///
/// The flag is not plain existence: a variable that is set but does not parse
/// as the requested type reports `false`, the same as an unset one.
pub trait EnvAccessor {
    fn lookup(&self, key: &str) -> Option<String>;

    fn get_string(&self, key: &str, fallback: &str) -> (String, bool) {
        match self.lookup(key) {
            Some(value) => (value, true),
            None => (fallback.to_string(), false),
        }
    }

    fn get_int(&self, key: &str, fallback: i64) -> (i64, bool) {
        parsed(key, self.lookup(key), fallback, |raw| raw.trim().parse().ok())
    }

    fn get_float(&self, key: &str, fallback: f64) -> (f64, bool) {
        parsed(key, self.lookup(key), fallback, |raw| raw.trim().parse().ok())
    }

    fn get_bool(&self, key: &str, fallback: bool) -> (bool, bool) {
        parsed(key, self.lookup(key), fallback, parse_bool)
    }
}

fn parsed<T, F>(key: &str, raw: Option<String>, fallback: T, parse: F) -> (T, bool)
where
    T: std::fmt::Display,
    F: Fn(&str) -> Option<T>,
{
    let Some(raw) = raw else {
        return (fallback, false);
    };
    match parse(&raw) {
        Some(value) => (value, true),
        None => {
            Logger::debug(&format!(
                "Invalid value '{raw}' for {key}, using fallback {fallback}"
            ));
            (fallback, false)
        }
    }
}

/// Accepts the same spellings as Go's strconv.ParseBool.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim() {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Reads the real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvAccessor for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed environment for tests.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MapEnv(pub HashMap<String, String>);

#[cfg(test)]
impl MapEnv {
    pub fn with(pairs: &[(&str, &str)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

#[cfg(test)]
impl EnvAccessor for MapEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}
