use super::super::rules::length_range;
use super::super::traits::Generator;
use crate::config::Rules;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde_json::Value;

/// Lowercase alphanumeric string sized by `minLength`/`maxLength`.
pub struct RandomString;

impl Generator for RandomString {
    fn key(&self) -> &str {
        "string"
    }

    fn validate_rules(&self, rules: &Rules) -> Result<(), String> {
        length_range(rules, 8, 16).map(|_| ())
    }

    fn produce(&self, rules: &Rules) -> Result<Value, String> {
        let (min, max) = length_range(rules, 8, 16)?;
        let mut rng = rand::thread_rng();
        let len = rng.gen_range(min..=max);
        let s: String = (0..len)
            .map(|_| (rng.sample(Alphanumeric) as char).to_ascii_lowercase())
            .collect();
        Ok(Value::String(s))
    }
}
