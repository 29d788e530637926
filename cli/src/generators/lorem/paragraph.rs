use super::super::rules::positive_count;
use super::super::traits::Generator;
use crate::config::Rules;
use rand::Rng;
use serde_json::Value;

/// `sentences` per paragraph, `paragraphs` joined by blank lines.
pub struct Paragraph;

impl Generator for Paragraph {
    fn key(&self) -> &str {
        "paragraph"
    }

    fn validate_rules(&self, rules: &Rules) -> Result<(), String> {
        positive_count(rules.sentences, "sentences")?;
        positive_count(rules.paragraphs, "paragraphs")?;
        Ok(())
    }

    fn produce(&self, rules: &Rules) -> Result<Value, String> {
        let sentences = positive_count(rules.sentences, "sentences")?;
        let paragraphs = positive_count(rules.paragraphs, "paragraphs")?.unwrap_or(1);
        let mut rng = rand::thread_rng();
        let text = (0..paragraphs)
            .map(|_| {
                let count = sentences.unwrap_or_else(|| rng.gen_range(3..=5));
                super::paragraph(&mut rng, count)
            })
            .collect::<Vec<_>>()
            .join("\n\n");
        Ok(Value::String(text))
    }
}
