use super::super::rules::numeric_range;
use super::super::traits::Generator;
use crate::config::Rules;
use rand::Rng;
use serde_json::Value;

pub struct Integer;

fn bounds(rules: &Rules) -> Result<(i64, i64), String> {
    let (min, max) = numeric_range(rules, 0.0, 1000.0)?;
    let (low, high) = (min.ceil() as i64, max.floor() as i64);
    if low > high {
        return Err(format!("no integer between min ({min}) and max ({max})"));
    }
    Ok((low, high))
}

impl Generator for Integer {
    fn key(&self) -> &str {
        "number"
    }

    fn validate_rules(&self, rules: &Rules) -> Result<(), String> {
        bounds(rules).map(|_| ())
    }

    fn produce(&self, rules: &Rules) -> Result<Value, String> {
        let (low, high) = bounds(rules)?;
        Ok(Value::from(rand::thread_rng().gen_range(low..=high)))
    }
}
