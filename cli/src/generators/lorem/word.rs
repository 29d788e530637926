use super::super::rules::positive_count;
use super::super::traits::Generator;
use super::super::words::{pick, LOREM};
use crate::config::Rules;
use serde_json::Value;

/// One lorem word, or `words` of them separated by spaces.
pub struct Word;

impl Generator for Word {
    fn key(&self) -> &str {
        "word"
    }

    fn validate_rules(&self, rules: &Rules) -> Result<(), String> {
        positive_count(rules.words, "words").map(|_| ())
    }

    fn produce(&self, rules: &Rules) -> Result<Value, String> {
        let count = positive_count(rules.words, "words")?.unwrap_or(1);
        let mut rng = rand::thread_rng();
        let words: Vec<&str> = (0..count).map(|_| pick(&mut rng, LOREM)).collect();
        Ok(Value::String(words.join(" ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        let rules = Rules {
            words: Some(3),
            ..Rules::default()
        };
        let value = Word.produce(&rules).unwrap();
        assert_eq!(value.as_str().unwrap().split(' ').count(), 3);
    }
}
