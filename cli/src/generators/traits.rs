use crate::config::Rules;
use serde_json::Value;

pub trait Generator: Send + Sync {
    /// Registry key used in `faker:<key>` modes.
    fn key(&self) -> &str;

    fn validate_rules(&self, _rules: &Rules) -> Result<(), String> {
        Ok(())
    }

    /// Produces a fresh value on every call.
    fn produce(&self, rules: &Rules) -> Result<Value, String>;
}
