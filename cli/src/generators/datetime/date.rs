use super::super::traits::Generator;
use crate::config::Rules;
use chrono::{Days, Local, Utc};
use rand::Rng;
use serde_json::Value;

/// A calendar date within the past year, `YYYY-MM-DD`.
pub struct PastDate;

/// The current instant in RFC 3339.
pub struct Now;

impl Generator for PastDate {
    fn key(&self) -> &str {
        "date"
    }

    fn produce(&self, _rules: &Rules) -> Result<Value, String> {
        let today = Local::now().date_naive();
        let back = rand::thread_rng().gen_range(0..365);
        let date = today.checked_sub_days(Days::new(back)).unwrap_or(today);
        Ok(Value::String(date.format("%Y-%m-%d").to_string()))
    }
}

impl Generator for Now {
    fn key(&self) -> &str {
        "datetime"
    }

    fn produce(&self, _rules: &Rules) -> Result<Value, String> {
        Ok(Value::String(Utc::now().to_rfc3339()))
    }
}
