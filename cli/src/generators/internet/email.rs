use super::super::traits::Generator;
use super::super::words::{pick, DOMAINS, FIRST_NAMES, LAST_NAMES};
use crate::config::Rules;
use rand::Rng;
use serde_json::Value;

pub struct Email;

impl Generator for Email {
    fn key(&self) -> &str {
        "email"
    }

    fn produce(&self, _rules: &Rules) -> Result<Value, String> {
        let mut rng = rand::thread_rng();
        let first = pick(&mut rng, FIRST_NAMES).to_lowercase();
        let last = pick(&mut rng, LAST_NAMES).to_lowercase();
        let suffix: u32 = rng.gen_range(1..=99_999);
        let domain = pick(&mut rng, DOMAINS);
        Ok(Value::String(format!("{first}.{last}{suffix}@{domain}")))
    }
}
