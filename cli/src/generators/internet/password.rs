use super::super::rules::length_range;
use super::super::traits::Generator;
use crate::config::Rules;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde_json::Value;

pub struct Password;

impl Generator for Password {
    fn key(&self) -> &str {
        "password"
    }

    fn validate_rules(&self, rules: &Rules) -> Result<(), String> {
        length_range(rules, 12, 16).map(|_| ())
    }

    fn produce(&self, rules: &Rules) -> Result<Value, String> {
        let (min, max) = length_range(rules, 12, 16)?;
        let mut rng = rand::thread_rng();
        let len = rng.gen_range(min..=max);
        let password: String = (0..len)
            .map(|_| rng.sample(Alphanumeric) as char)
            .collect();
        Ok(Value::String(password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_respects_length_rules() {
        let rules = Rules {
            min_length: Some(20),
            max_length: Some(24),
            ..Rules::default()
        };
        for _ in 0..20 {
            let value = Password.produce(&rules).unwrap();
            let len = value.as_str().unwrap().len();
            assert!((20..=24).contains(&len), "{len}");
        }
    }

    #[test]
    fn test_password_rejects_inverted_range() {
        let rules = Rules {
            min_length: Some(10),
            max_length: Some(2),
            ..Rules::default()
        };
        assert!(Password.validate_rules(&rules).is_err());
        assert!(Password.produce(&rules).is_err());
    }
}
