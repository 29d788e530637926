use super::super::traits::Generator;
use super::super::words::{pick, FIRST_NAMES, LAST_NAMES};
use crate::config::Rules;
use rand::Rng;
use serde_json::Value;

pub struct Username;

impl Generator for Username {
    fn key(&self) -> &str {
        "username"
    }

    fn produce(&self, _rules: &Rules) -> Result<Value, String> {
        let mut rng = rand::thread_rng();
        let first = pick(&mut rng, FIRST_NAMES).to_lowercase();
        let last = pick(&mut rng, LAST_NAMES).to_lowercase();
        let number: u32 = rng.gen_range(1..=9_999);
        Ok(Value::String(format!("{first}_{last}{number}")))
    }
}
