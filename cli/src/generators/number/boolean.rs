use super::super::traits::Generator;
use crate::config::Rules;
use rand::Rng;
use serde_json::Value;

pub struct Boolean;

impl Generator for Boolean {
    fn key(&self) -> &str {
        "boolean"
    }

    fn produce(&self, _rules: &Rules) -> Result<Value, String> {
        Ok(Value::Bool(rand::thread_rng().gen_bool(0.5)))
    }
}
