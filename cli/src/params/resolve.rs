use super::flags::FlagMap;
use crate::config::{Endpoint, Mode, ParamType, Parameter, Placement};
use crate::core::logger::Logger;
use crate::environment::EnvAccessor;
use serde_json::{Number, Value};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    Flag,
    Env,
    Faker,
    Default,
}

impl ValueSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueSource::Flag => "flag",
            ValueSource::Env => "env",
            ValueSource::Faker => "faker",
            ValueSource::Default => "default",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedValue {
    pub value: Value,
    pub source: ValueSource,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedParameter {
    pub name: String,
    pub placement: Placement,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResolveError {
    Missing {
        key: String,
    },
    UnknownGenerator {
        key: String,
        generator: String,
    },
    Generator {
        key: String,
        generator: String,
        message: String,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::Missing { key } => write!(f, "missing required parameter: {key}"),
            ResolveError::UnknownGenerator { key, generator } => write!(
                f,
                "no value for parameter {key}: unknown faker generator '{generator}'"
            ),
            ResolveError::Generator {
                key,
                generator,
                message,
            } => write!(
                f,
                "no value for parameter {key}: faker generator '{generator}' failed: {message}"
            ),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Picks one value per parameter: flag, then the mode source (`env:` or
/// `faker:`), then the endpoint default.
pub struct Resolver<'a> {
    flags: &'a FlagMap,
    env: &'a dyn EnvAccessor,
}

impl<'a> Resolver<'a> {
    pub fn new(flags: &'a FlagMap, env: &'a dyn EnvAccessor) -> Self {
        Self { flags, env }
    }

    pub fn resolve(
        &self,
        key: &str,
        param: &Parameter,
        defaults: &BTreeMap<String, Value>,
    ) -> Result<ResolvedValue, ResolveError> {
        if let Some(value) = self.flags.get(key) {
            return Ok(ResolvedValue {
                value: value.clone(),
                source: ValueSource::Flag,
            });
        }

        let mode_error = match self.from_mode(key, param) {
            Ok(Some(resolved)) => return Ok(resolved),
            Ok(None) => None,
            Err(e) => {
                Logger::debug(&format!("{e}, falling back to defaults"));
                Some(e)
            }
        };

        if let Some(value) = defaults.get(key) {
            return Ok(ResolvedValue {
                value: value.clone(),
                source: ValueSource::Default,
            });
        }

        Err(mode_error.unwrap_or_else(|| ResolveError::Missing {
            key: key.to_string(),
        }))
    }

    /// Resolves every parameter of `endpoint` once, in name order. Optional
    /// parameters with no value are left out; a required one aborts.
    pub fn resolve_all(&self, endpoint: &Endpoint) -> Result<Vec<ResolvedParameter>, ResolveError> {
        let mut resolved = Vec::with_capacity(endpoint.parameters.len());

        for (name, param) in &endpoint.parameters {
            match self.resolve(name, param, &endpoint.defaults) {
                Ok(rv) => {
                    Logger::debug(&format!(
                        "Parameter {name} resolved from {}",
                        rv.source.as_str()
                    ));
                    resolved.push(ResolvedParameter {
                        name: name.clone(),
                        placement: param.placement_for(endpoint.method),
                        value: rv.value,
                    });
                }
                Err(e) if param.required => return Err(e),
                Err(e) => Logger::debug(&format!("Omitting optional parameter {name}: {e}")),
            }
        }

        Ok(resolved)
    }

    fn from_mode(&self, key: &str, param: &Parameter) -> Result<Option<ResolvedValue>, ResolveError> {
        match param.mode() {
            Some(Mode::Env(var)) => Ok(self.from_env(&var, param.param_type).map(|value| {
                ResolvedValue {
                    value,
                    source: ValueSource::Env,
                }
            })),
            Some(Mode::Faker(generator)) => {
                let g = crate::generators::get_generator(&generator).ok_or_else(|| {
                    ResolveError::UnknownGenerator {
                        key: key.to_string(),
                        generator: generator.clone(),
                    }
                })?;
                let value = g
                    .produce(&param.rules)
                    .map_err(|message| ResolveError::Generator {
                        key: key.to_string(),
                        generator: generator.clone(),
                        message,
                    })?;
                Ok(Some(ResolvedValue {
                    value,
                    source: ValueSource::Faker,
                }))
            }
            None => Ok(None),
        }
    }

    fn from_env(&self, var: &str, param_type: ParamType) -> Option<Value> {
        match param_type {
            ParamType::String => {
                let (value, exists) = self.env.get_string(var, "");
                (exists && !value.is_empty()).then_some(Value::String(value))
            }
            ParamType::Int => {
                let (value, exists) = self.env.get_int(var, 0);
                exists.then_some(Value::from(value))
            }
            ParamType::Float => {
                let (value, exists) = self.env.get_float(var, 0.0);
                if exists {
                    Number::from_f64(value).map(Value::Number)
                } else {
                    None
                }
            }
            ParamType::Bool => {
                let (value, exists) = self.env.get_bool(var, false);
                exists.then_some(Value::Bool(value))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HttpMethod;
    use crate::environment::accessor::MapEnv;
    use serde_json::json;

    fn param(mode: &str, param_type: ParamType, required: bool) -> Parameter {
        Parameter {
            param_type,
            mode: mode.to_string(),
            required,
            ..Parameter::default()
        }
    }

    fn flags(pairs: &[(&str, Value)]) -> FlagMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn defaults(pairs: &[(&str, Value)]) -> BTreeMap<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_flag_shadows_everything() {
        let env = MapEnv::with(&[("TOKEN", "from-env")]);
        for flag_value in [json!(false), json!(0), json!(""), json!("cli")] {
            let f = flags(&[("token", flag_value.clone())]);
            let resolver = Resolver::new(&f, &env);
            for mode in ["env:TOKEN", "faker:email", ""] {
                let rv = resolver
                    .resolve(
                        "token",
                        &param(mode, ParamType::String, true),
                        &defaults(&[("token", json!("default"))]),
                    )
                    .unwrap();
                assert_eq!(rv.value, flag_value);
                assert_eq!(rv.source, ValueSource::Flag);
            }
        }
    }

    #[test]
    fn test_env_typed_lookup() {
        let env = MapEnv::with(&[
            ("API_KEY", "k-123"),
            ("PAGE", "3"),
            ("RATIO", "0.75"),
            ("ACTIVE", "true"),
        ]);
        let f = FlagMap::new();
        let resolver = Resolver::new(&f, &env);
        let none = BTreeMap::new();

        let cases = [
            ("env:API_KEY", ParamType::String, json!("k-123")),
            ("env:PAGE", ParamType::Int, json!(3)),
            ("env:RATIO", ParamType::Float, json!(0.75)),
            ("env:ACTIVE", ParamType::Bool, json!(true)),
        ];
        for (mode, ty, expected) in cases {
            let rv = resolver.resolve("p", &param(mode, ty, true), &none).unwrap();
            assert_eq!(rv.value, expected, "{mode}");
            assert_eq!(rv.source, ValueSource::Env);
        }
    }

    #[test]
    fn test_env_empty_or_mistyped_falls_back_to_default() {
        let env = MapEnv::with(&[("EMPTY", ""), ("PAGE", "three")]);
        let f = FlagMap::new();
        let resolver = Resolver::new(&f, &env);
        let d = defaults(&[("p", json!("fallback"))]);

        let rv = resolver
            .resolve("p", &param("env:EMPTY", ParamType::String, true), &d)
            .unwrap();
        assert_eq!(rv.source, ValueSource::Default);

        let rv = resolver
            .resolve("p", &param("env:PAGE", ParamType::Int, true), &d)
            .unwrap();
        assert_eq!(rv.source, ValueSource::Default);
        assert_eq!(rv.value, json!("fallback"));
    }

    #[test]
    fn test_faker_email_every_time() {
        let env = MapEnv::default();
        let f = FlagMap::new();
        let resolver = Resolver::new(&f, &env);
        let p = param("faker:email", ParamType::String, true);
        for _ in 0..20 {
            let rv = resolver.resolve("email", &p, &BTreeMap::new()).unwrap();
            assert_eq!(rv.source, ValueSource::Faker);
            let email = rv.value.as_str().unwrap().to_string();
            let (local, domain) = email.split_once('@').unwrap();
            assert!(!local.is_empty());
            assert!(domain.contains('.'));
        }
    }

    #[test]
    fn test_unknown_generator_falls_through_to_default() {
        let env = MapEnv::default();
        let f = FlagMap::new();
        let resolver = Resolver::new(&f, &env);
        let p = param("faker:unicorn", ParamType::String, true);

        let rv = resolver
            .resolve("x", &p, &defaults(&[("x", json!("d"))]))
            .unwrap();
        assert_eq!(rv.value, json!("d"));
        assert_eq!(rv.source, ValueSource::Default);

        let err = resolver.resolve("x", &p, &BTreeMap::new()).unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnknownGenerator {
                key: "x".to_string(),
                generator: "unicorn".to_string()
            }
        );
    }

    #[test]
    fn test_default_returned_verbatim() {
        let env = MapEnv::default();
        let f = FlagMap::new();
        let resolver = Resolver::new(&f, &env);
        let d = defaults(&[("limit", json!(25)), ("tags", json!(["a", "b"]))]);

        let rv = resolver
            .resolve("limit", &param("", ParamType::Int, false), &d)
            .unwrap();
        assert_eq!(rv.value, json!(25));
        let rv = resolver
            .resolve("tags", &param("env:UNSET", ParamType::String, false), &d)
            .unwrap();
        assert_eq!(rv.value, json!(["a", "b"]));
    }

    #[test]
    fn test_missing_value() {
        let env = MapEnv::default();
        let f = FlagMap::new();
        let resolver = Resolver::new(&f, &env);
        let err = resolver
            .resolve("id", &param("", ParamType::Int, true), &BTreeMap::new())
            .unwrap_err();
        assert_eq!(err.to_string(), "missing required parameter: id");
    }

    fn endpoint(yaml: &str) -> Endpoint {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_resolve_all_omits_optional_and_fails_required() {
        let ep = endpoint(
            r#"
method: GET
path: /users/{id}
parameters:
  id:
    type: int
    in: path
    required: true
  role:
    in: query
  active:
    type: bool
    in: query
defaults:
  active: true
"#,
        );
        let env = MapEnv::default();

        let f = flags(&[("id", json!(42))]);
        let resolved = Resolver::new(&f, &env).resolve_all(&ep).unwrap();
        let names: Vec<&str> = resolved.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["active", "id"]);
        assert_eq!(resolved[1].placement, Placement::Path);

        let f = FlagMap::new();
        let err = Resolver::new(&f, &env).resolve_all(&ep).unwrap_err();
        assert_eq!(err, ResolveError::Missing { key: "id".to_string() });
    }

    #[test]
    fn test_resolve_all_generates_fresh_values() {
        let ep = endpoint(
            r#"
method: POST
path: /login
parameters:
  email:
    mode: faker:email
    required: true
  password:
    mode: faker:password
    required: true
"#,
        );
        assert_eq!(ep.method, HttpMethod::POST);
        let env = MapEnv::default();
        let f = FlagMap::new();
        let resolver = Resolver::new(&f, &env);

        let first = resolver.resolve_all(&ep).unwrap();
        let second = resolver.resolve_all(&ep).unwrap();
        assert!(first.iter().all(|p| p.placement == Placement::Body));
        assert_ne!(first, second);
    }
}
