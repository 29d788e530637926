use super::super::rules::dimensions;
use super::super::traits::Generator;
use crate::config::Rules;
use rand::Rng;
use serde_json::Value;

/// Placeholder image URL sized by `width` x `height`.
pub struct ImageUrl;

impl Generator for ImageUrl {
    fn key(&self) -> &str {
        "image"
    }

    fn validate_rules(&self, rules: &Rules) -> Result<(), String> {
        dimensions(rules, 640, 480).map(|_| ())
    }

    fn produce(&self, rules: &Rules) -> Result<Value, String> {
        let (width, height) = dimensions(rules, 640, 480)?;
        let seed: u32 = rand::thread_rng().gen_range(1..=100_000);
        Ok(Value::String(format!(
            "https://picsum.photos/{width}/{height}?random={seed}"
        )))
    }
}
