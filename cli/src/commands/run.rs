use crate::client::{CallResult, RunOptions};
use crate::commands::shared::GlobalArgs;
use crate::core::formatter::OutputFormat;
use crate::core::logger::Logger;
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;
use std::io::IsTerminal;

#[derive(Serialize)]
pub struct CallResultView {
    pub status: u16,
    pub method: String,
    pub url: String,
    pub duration_ms: u64,
    pub body: Value,
}

impl From<&CallResult> for CallResultView {
    fn from(result: &CallResult) -> Self {
        let body = serde_json::from_slice(&result.body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&result.body).to_string()));
        Self {
            status: result.status,
            method: result.method.as_str().to_string(),
            url: result.url.clone(),
            duration_ms: result.duration.as_millis() as u64,
            body,
        }
    }
}

/// `raw` is the endpoint name followed by its flags.
pub async fn execute(args: &GlobalArgs, raw: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let (name, rest) = raw.split_first().ok_or("endpoint name is required")?;
    let flags = crate::params::parse_flags(rest);
    Logger::debug(&format!("Running {name} with {} flag(s)", flags.len()));

    let options = RunOptions {
        show_loader: args.output == OutputFormat::Text && std::io::stderr().is_terminal(),
    };
    let mut client = args.open_client(options)?;
    let result = client.run(name, &flags).await?;

    match args.output {
        OutputFormat::Text => print!("{}", render_text(&result)),
        OutputFormat::Json => {
            let formatter = crate::core::formatter::get_formatter(&args.output);
            print!("{}", formatter.format(&CallResultView::from(&result)));
        }
    }

    Ok(())
}

fn status_line(result: &CallResult) -> String {
    let line = format!(
        "{} • {} {} • {}ms",
        result.status,
        result.method,
        result.url,
        result.duration.as_millis()
    );
    match result.status {
        200..=299 => line.green().to_string(),
        500..=599 => line.red().to_string(),
        _ => line.yellow().to_string(),
    }
}

fn render_text(result: &CallResult) -> String {
    let mut out = status_line(result);
    out.push('\n');

    let body = crate::core::json::pretty_body(&result.body)
        .unwrap_or_else(|| String::from_utf8_lossy(&result.body).to_string());
    if !body.is_empty() {
        out.push_str(&body);
        if !body.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HttpMethod;
    use serde_json::json;
    use std::time::Duration;

    fn result(status: u16, body: &[u8]) -> CallResult {
        CallResult {
            status,
            body: body.to_vec(),
            method: HttpMethod::GET,
            url: "http://localhost/users/42".to_string(),
            duration: Duration::from_millis(12),
        }
    }

    #[test]
    fn test_text_pretty_prints_json_body() {
        colored::control::set_override(false);
        let out = render_text(&result(200, br#"{"id":42}"#));
        assert_eq!(
            out,
            "200 • GET http://localhost/users/42 • 12ms\n{\n  \"id\": 42\n}\n"
        );
    }

    #[test]
    fn test_text_keeps_raw_body() {
        colored::control::set_override(false);
        let out = render_text(&result(404, b"not here"));
        assert!(out.ends_with("\nnot here\n"));
    }

    #[test]
    fn test_json_view_parses_body_when_possible() {
        let view = CallResultView::from(&result(201, br#"{"ok":true}"#));
        assert_eq!(view.body, json!({"ok": true}));
        assert_eq!(view.duration_ms, 12);

        let view = CallResultView::from(&result(500, b"boom"));
        assert_eq!(view.body, json!("boom"));
    }
}
