use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn render_text<T: Serialize + ?Sized>(model: &T) -> String {
    let value = serde_json::to_value(model).unwrap_or(Value::Null);
    let mut out = String::new();
    render_value(&value, 0, &mut out);
    out
}

/// YAML-like text: `key: value` lines, nested blocks indented by two, list
/// items opened with `- ` on their first line. Nulls and empty collections are
/// left out.
fn render_value(value: &Value, indent: usize, out: &mut String) {
    let pad = " ".repeat(indent);
    match value {
        Value::Null => {}
        Value::Array(items) => {
            for item in items {
                let mut block = String::new();
                render_value(item, indent + 2, &mut block);
                match block.get(indent + 2..) {
                    Some(rest) if !rest.is_empty() => {
                        out.push_str(&format!("{pad}- {rest}"));
                    }
                    _ => {}
                }
            }
        }
        Value::Object(map) => {
            for (key, field) in map {
                match field {
                    Value::Null => {}
                    Value::Array(items) if items.is_empty() => {}
                    Value::Object(fields) if fields.is_empty() => {}
                    Value::Array(_) | Value::Object(_) => {
                        out.push_str(&format!("{pad}{key}:\n"));
                        render_value(field, indent + 2, out);
                    }
                    scalar => {
                        let text = super::json::plain_string(scalar);
                        out.push_str(&format!("{pad}{key}: {text}\n"));
                    }
                }
            }
        }
        scalar => {
            for line in super::json::plain_string(scalar).lines() {
                out.push_str(&format!("{pad}{line}\n"));
            }
        }
    }
}

fn render_json<T: Serialize + ?Sized>(model: &T) -> String {
    let mut out = serde_json::to_string_pretty(model).unwrap_or_else(|_| "null".to_string());
    out.push('\n');
    out
}

pub struct Formatter {
    engine: OutputFormat,
}

impl Formatter {
    pub fn new(engine: OutputFormat) -> Self {
        Self { engine }
    }

    pub fn format<T: Serialize + ?Sized>(&self, model: &T) -> String {
        match self.engine {
            OutputFormat::Text => render_text(model),
            OutputFormat::Json => render_json(model),
        }
    }

    /// Text output puts `title` above the items, or prints `empty_msg` alone.
    /// JSON output is always the bare array.
    pub fn format_list<T: Serialize>(&self, list: &[T], title: &str, empty_msg: &str) -> String {
        match self.engine {
            OutputFormat::Json => render_json(list),
            OutputFormat::Text if list.is_empty() => format!("{empty_msg}\n"),
            OutputFormat::Text => format!("{title}\n{}", render_text(list)),
        }
    }
}

pub fn get_formatter(output_format: &OutputFormat) -> Formatter {
    Formatter::new(*output_format)
}
