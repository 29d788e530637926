use super::super::rules::positive_count;
use super::super::traits::Generator;
use crate::config::Rules;
use rand::Rng;
use serde_json::Value;

pub struct Sentence;

impl Generator for Sentence {
    fn key(&self) -> &str {
        "sentence"
    }

    fn validate_rules(&self, rules: &Rules) -> Result<(), String> {
        positive_count(rules.words, "words").map(|_| ())
    }

    fn produce(&self, rules: &Rules) -> Result<Value, String> {
        let mut rng = rand::thread_rng();
        let words = match positive_count(rules.words, "words")? {
            Some(words) => words,
            None => rng.gen_range(4..=10),
        };
        Ok(Value::String(super::sentence(&mut rng, words)))
    }
}
