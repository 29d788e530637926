use crate::variables::store::VariableMap;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{(\w+)\}\}").unwrap();
}

/// Rewrites `{{name}}` placeholders with stored variables. Placeholders with no
/// stored value are left in place.
pub fn apply_variables(text: &str, variables: &VariableMap) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures| match variables.get(&caps[1]) {
            Some(value) => crate::core::json::plain_string(value),
            None => caps[0].to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vars(value: serde_json::Value) -> VariableMap {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_replaces_known_variables() {
        let out = apply_variables(
            "Authorization: Bearer {{token}}",
            &vars(json!({"token": "abc"})),
        );
        assert_eq!(out, "Authorization: Bearer abc");
    }

    #[test]
    fn test_leaves_unknown_placeholders() {
        let out = apply_variables("id: {{foo}} / {{bar}}", &vars(json!({"bar": 7})));
        assert_eq!(out, "id: {{foo}} / 7");
    }

    #[test]
    fn test_non_string_values_use_json_form() {
        let out = apply_variables(
            "{{flag}} {{ratio}} {{obj}}",
            &vars(json!({"flag": false, "ratio": 0.5, "obj": {"a": 1}})),
        );
        assert_eq!(out, r#"false 0.5 {"a":1}"#);
    }

    #[test]
    fn test_only_word_identifiers_match() {
        let out = apply_variables(
            "{{ token }} {{to-ken}} {{token}}",
            &vars(json!({"token": "x", "to-ken": "y"})),
        );
        assert_eq!(out, "{{ token }} {{to-ken}} x");
    }
}
