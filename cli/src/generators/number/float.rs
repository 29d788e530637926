use super::super::rules::numeric_range;
use super::super::traits::Generator;
use crate::config::Rules;
use rand::Rng;
use serde_json::{json, Value};

/// Rounded to two decimals.
pub struct Float;

impl Generator for Float {
    fn key(&self) -> &str {
        "float"
    }

    fn validate_rules(&self, rules: &Rules) -> Result<(), String> {
        numeric_range(rules, 0.0, 1000.0).map(|_| ())
    }

    fn produce(&self, rules: &Rules) -> Result<Value, String> {
        let (min, max) = numeric_range(rules, 0.0, 1000.0)?;
        let raw: f64 = rand::thread_rng().gen_range(min..=max);
        let rounded = ((raw * 100.0).round() / 100.0).clamp(min, max);
        Ok(json!(rounded))
    }
}
