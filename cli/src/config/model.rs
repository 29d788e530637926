use super::http_method::HttpMethod;
use super::mode::Mode;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub endpoints: BTreeMap<String, Endpoint>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(rename = "baseUrl", default)]
    pub base_url: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Endpoint {
    pub method: HttpMethod,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: BTreeMap<String, Parameter>,
    #[serde(default)]
    pub defaults: BTreeMap<String, Value>,
    #[serde(rename = "set-variables", default)]
    pub set_variables: Option<SetVariables>,
}

impl Endpoint {
    /// Variable name -> dotted source path, empty when nothing is captured.
    pub fn body_bindings(&self) -> Option<&BTreeMap<String, String>> {
        self.set_variables
            .as_ref()
            .map(|sv| &sv.body)
            .filter(|body| !body.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetVariables {
    #[serde(default)]
    pub body: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Parameter {
    #[serde(rename = "type", default)]
    pub param_type: ParamType,
    #[serde(default)]
    pub mode: String,
    #[serde(rename = "in", default)]
    pub placement: Option<Placement>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rules: Rules,
}

impl Parameter {
    /// Malformed modes are rejected when the config is validated.
    pub fn mode(&self) -> Option<Mode> {
        Mode::parse(&self.mode).ok().flatten()
    }

    /// Parameters without `in` travel in the body of POST/PUT/PATCH calls and
    /// in the query string otherwise.
    pub fn placement_for(&self, method: HttpMethod) -> Placement {
        match self.placement {
            Some(placement) => placement,
            None if method.carries_body() => Placement::Body,
            None => Placement::Query,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    #[default]
    String,
    #[serde(alias = "integer")]
    Int,
    #[serde(alias = "boolean")]
    Bool,
    #[serde(alias = "number")]
    Float,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Int => "int",
            ParamType::Bool => "bool",
            ParamType::Float => "float",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Path,
    Query,
    Body,
}

impl Placement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Placement::Path => "path",
            Placement::Query => "query",
            Placement::Body => "body",
        }
    }
}

/// Per-parameter generation rules consumed by the faker generators.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rules {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub words: Option<usize>,
    pub sentences: Option<usize>,
    pub paragraphs: Option<usize>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}
