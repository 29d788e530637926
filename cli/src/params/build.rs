use super::resolve::ResolvedParameter;
use crate::config::{HttpMethod, Placement};
use crate::core::json::plain_string;
use crate::core::logger::Logger;
use serde_json::{Map, Value};

/// Everything the dispatcher needs for one call.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestPlan {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<Value>,
}

/// Substitutes `{name}` for path parameters and appends query parameters in
/// the order given, `?` before the first and `&` before the rest.
pub fn build_path(template: &str, params: &[ResolvedParameter]) -> String {
    let mut path = template.to_string();

    for param in params.iter().filter(|p| p.placement == Placement::Path) {
        path = path.replace(&format!("{{{}}}", param.name), &plain_string(&param.value));
    }

    let query_params = params.iter().filter(|p| p.placement == Placement::Query);
    for (i, param) in query_params.enumerate() {
        let sep = if i == 0 { '?' } else { '&' };
        path.push(sep);
        path.push_str(&param.name);
        path.push('=');
        path.push_str(&plain_string(&param.value));
    }

    path
}

/// Flat JSON object of body parameters for POST/PUT/PATCH, `None` otherwise.
pub fn build_body(method: HttpMethod, params: &[ResolvedParameter]) -> Option<Value> {
    let body_params = params.iter().filter(|p| p.placement == Placement::Body);

    if !method.carries_body() {
        for param in body_params {
            Logger::debug(&format!(
                "Ignoring body parameter {} for {} request",
                param.name,
                method.as_str()
            ));
        }
        return None;
    }

    let payload: Map<String, Value> = body_params
        .map(|p| (p.name.clone(), p.value.clone()))
        .collect();
    Some(Value::Object(payload))
}

pub fn build_request(
    base_url: &str,
    method: HttpMethod,
    path_template: &str,
    params: &[ResolvedParameter],
) -> RequestPlan {
    RequestPlan {
        method,
        url: format!("{base_url}{}", build_path(path_template, params)),
        body: build_body(method, params),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn p(name: &str, placement: Placement, value: Value) -> ResolvedParameter {
        ResolvedParameter {
            name: name.to_string(),
            placement,
            value,
        }
    }

    #[test]
    fn test_path_substitution() {
        let params = vec![p("id", Placement::Path, json!(42))];
        assert_eq!(build_path("/users/{id}", &params), "/users/42");
    }

    #[test]
    fn test_path_and_query() {
        let params = vec![
            p("active", Placement::Query, json!(true)),
            p("id", Placement::Path, json!(42)),
            p("role", Placement::Query, json!("admin")),
        ];
        assert_eq!(
            build_path("/users/{id}", &params),
            "/users/42?active=true&role=admin"
        );
    }

    #[test]
    fn test_path_parameter_without_placeholder_is_noop() {
        let params = vec![p("id", Placement::Path, json!("x"))];
        assert_eq!(build_path("/health", &params), "/health");
    }

    #[test]
    fn test_repeated_placeholder() {
        let params = vec![p("org", Placement::Path, json!("acme"))];
        assert_eq!(
            build_path("/orgs/{org}/mirror/{org}", &params),
            "/orgs/acme/mirror/acme"
        );
    }

    #[test]
    fn test_body_only_for_body_methods() {
        let params = vec![
            p("email", Placement::Body, json!("a@b.c")),
            p("password", Placement::Body, json!("pw")),
            p("page", Placement::Query, json!(1)),
        ];
        assert_eq!(
            build_body(HttpMethod::POST, &params),
            Some(json!({"email": "a@b.c", "password": "pw"}))
        );
        assert_eq!(build_body(HttpMethod::GET, &params), None);
        assert_eq!(build_body(HttpMethod::DELETE, &params), None);
    }

    #[test]
    fn test_body_method_without_body_params_sends_empty_object() {
        assert_eq!(build_body(HttpMethod::PUT, &[]), Some(json!({})));
    }

    #[test]
    fn test_build_request_concatenates_base_url() {
        let params = vec![p("id", Placement::Path, json!(7))];
        let plan = build_request("http://api.test/", HttpMethod::DELETE, "/items/{id}", &params);
        assert_eq!(plan.url, "http://api.test//items/7");
        assert_eq!(plan.method, HttpMethod::DELETE);
        assert_eq!(plan.body, None);
    }
}
