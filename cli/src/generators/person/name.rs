use super::super::traits::Generator;
use super::super::words::{pick, FIRST_NAMES, LAST_NAMES};
use crate::config::Rules;
use serde_json::Value;

pub struct FullName;
pub struct FirstName;
pub struct LastName;

impl Generator for FullName {
    fn key(&self) -> &str {
        "name"
    }

    fn produce(&self, _rules: &Rules) -> Result<Value, String> {
        let mut rng = rand::thread_rng();
        let first = pick(&mut rng, FIRST_NAMES);
        let last = pick(&mut rng, LAST_NAMES);
        Ok(Value::String(format!("{first} {last}")))
    }
}

impl Generator for FirstName {
    fn key(&self) -> &str {
        "first_name"
    }

    fn produce(&self, _rules: &Rules) -> Result<Value, String> {
        Ok(Value::String(
            pick(&mut rand::thread_rng(), FIRST_NAMES).to_string(),
        ))
    }
}

impl Generator for LastName {
    fn key(&self) -> &str {
        "last_name"
    }

    fn produce(&self, _rules: &Rules) -> Result<Value, String> {
        Ok(Value::String(
            pick(&mut rand::thread_rng(), LAST_NAMES).to_string(),
        ))
    }
}
