use super::super::traits::Generator;
use crate::config::Rules;
use serde_json::Value;
use uuid::Uuid;

pub struct RandomGuid;

impl Generator for RandomGuid {
    fn key(&self) -> &str {
        "uuid"
    }

    fn produce(&self, _rules: &Rules) -> Result<Value, String> {
        Ok(Value::String(Uuid::new_v4().to_string()))
    }
}
