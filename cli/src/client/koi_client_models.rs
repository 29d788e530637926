use crate::config::HttpMethod;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Outcome of one dispatched call. Any HTTP status lands here.
#[derive(Debug, Clone)]
pub struct CallResult {
    pub status: u16,
    pub body: Vec<u8>,
    pub method: HttpMethod,
    pub url: String,
    pub duration: Duration,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct EndpointInfo {
    pub name: String,
    pub method: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct ParameterInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    #[serde(rename = "in")]
    pub placement: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct BindingInfo {
    pub variable: String,
    pub path: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct EndpointDetails {
    pub name: String,
    pub method: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parameters: Vec<ParameterInfo>,
    pub bindings: Vec<BindingInfo>,
}

#[derive(Debug, Serialize, Clone)]
pub struct ApiOverview {
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Draw the spinner when the call outlasts the loader delay.
    pub show_loader: bool,
}
