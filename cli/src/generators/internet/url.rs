use super::super::traits::Generator;
use super::super::words::{pick, LOREM};
use crate::config::Rules;
use serde_json::Value;

pub struct Url;

impl Generator for Url {
    fn key(&self) -> &str {
        "url"
    }

    fn produce(&self, _rules: &Rules) -> Result<Value, String> {
        let mut rng = rand::thread_rng();
        let host = format!("{}{}", pick(&mut rng, LOREM), pick(&mut rng, LOREM));
        let path = pick(&mut rng, LOREM);
        Ok(Value::String(format!("https://www.{host}.com/{path}")))
    }
}
