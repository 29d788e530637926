use super::koi_client_models::CallResult;
use crate::core::logger::Logger;
use crate::params::RequestPlan;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, USER_AGENT};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::time::Instant;

#[derive(Debug)]
pub struct HttpError {
    pub message: String,
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP Error: {}", self.message)
    }
}

impl Error for HttpError {}

impl From<reqwest::Error> for HttpError {
    fn from(error: reqwest::Error) -> Self {
        HttpError {
            message: error.to_string(),
        }
    }
}

fn header_value(value: &str) -> Result<HeaderValue, HttpError> {
    HeaderValue::from_str(value).map_err(|e| HttpError {
        message: format!("invalid header value '{value}': {e}"),
    })
}

/// Sends the planned request. Any HTTP status is a successful call; only
/// transport, URL and encoding problems are errors.
pub async fn execute_request(
    client: &reqwest::Client,
    plan: &RequestPlan,
    headers: &BTreeMap<String, String>,
) -> Result<CallResult, HttpError> {
    Logger::debug(&format!(
        "Executing {} request to URL: {}",
        plan.method.as_str(),
        plan.url
    ));

    let url = reqwest::Url::parse(&plan.url).map_err(|e| HttpError {
        message: format!("invalid URL '{}': {e}", plan.url),
    })?;

    let mut header_map = HeaderMap::new();
    header_map.insert(USER_AGENT, header_value(&crate::core::version::user_agent())?);

    let encoded = match &plan.body {
        Some(body) => {
            let encoded = serde_json::to_string(body).map_err(|e| HttpError {
                message: format!("error encoding JSON: {e}"),
            })?;
            Logger::debug(&format!("Request body: {encoded}"));
            header_map.insert(CONTENT_TYPE, header_value(crate::core::json::CONTENT_TYPE)?);
            Some(encoded)
        }
        None => None,
    };

    // Configured headers replace the built-in ones of the same name.
    for (key, value) in headers {
        Logger::debug(&format!("Adding header: {key}: {value}"));
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| HttpError {
            message: format!("invalid header name '{key}': {e}"),
        })?;
        header_map.insert(name, header_value(value)?);
    }

    let mut req_builder = client
        .request(plan.method.to_reqwest_method(), url)
        .headers(header_map);
    if let Some(encoded) = encoded {
        req_builder = req_builder.body(encoded);
    }

    let start_time = Instant::now();
    let response = req_builder.send().await?;
    let status = response.status().as_u16();
    let body = response.bytes().await?.to_vec();
    let duration = start_time.elapsed();

    Logger::debug(&format!(
        "Response status: {status} ({} ms)",
        duration.as_millis()
    ));

    Ok(CallResult {
        status,
        body,
        method: plan.method,
        url: plan.url.clone(),
        duration,
    })
}
