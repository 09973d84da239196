//! Output formatting utilities

use crate::TypeError;
use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::Value;
use std::io::IsTerminal;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Pretty,
    /// One JSON document
    Json,
}

/// Color output modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

/// Set up color output based on user preference
pub fn setup_colors(mode: ColorMode) {
    let enabled = match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    };
    colored::control::set_override(enabled);
}

/// Format an error for display
///
/// Type errors render as diagnostics with their code, location and help.
pub fn format_error(error: &anyhow::Error) -> String {
    match error.downcast_ref::<TypeError>() {
        Some(type_error) => format_type_error(type_error),
        None => format!("{} {:#}", "Error:".red().bold(), error),
    }
}

pub fn format_type_error(error: &TypeError) -> String {
    error.to_diagnostic().render()
}

/// Format JSON value for output
pub fn format_json(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize JSON")
}

#[derive(Tabled)]
struct KeyValue {
    #[tabled(rename = "Field")]
    key: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Format a JSON object as a two-column table, or an array of objects as rows
pub fn format_as_table(value: &Value) -> Option<String> {
    match value {
        Value::Object(obj) => {
            let rows = obj.iter().map(|(k, v)| KeyValue {
                key: k.clone(),
                value: format_value(v),
            });
            Some(Table::new(rows).with(Style::modern()).to_string())
        }
        Value::Array(items) if items.is_empty() => Some("(empty list)".to_string()),
        Value::Array(items) => {
            let Some(Value::Object(first)) = items.first() else {
                return None;
            };
            let keys: Vec<&String> = first.keys().collect();
            let mut builder = tabled::builder::Builder::default();
            builder.push_record(keys.iter().map(|k| k.to_string()));
            for item in items {
                let Value::Object(obj) = item else {
                    return None;
                };
                builder.push_record(
                    keys.iter()
                        .map(|k| obj.get(k.as_str()).map(format_value).unwrap_or_default()),
                );
            }
            Some(builder.build().with(Style::modern()).to_string())
        }
        _ => None,
    }
}

/// Format a simple value for display
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => arr.iter().map(format_value).collect::<Vec<_>>().join(", "),
        Value::Object(obj) => format!("{{}} with {} fields", obj.len()),
    }
}

/// Render a value in the requested format
pub fn render(value: &Value, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => format_json(value),
        OutputFormat::Pretty => match format_as_table(value) {
            Some(table) => Ok(table),
            None => format_json(value),
        },
    }
}

/// Print a value to stdout in the requested format
pub fn print_output(value: &Value, format: OutputFormat) -> Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_object_as_table() {
        let table = render(&json!({"name": "Decimal(10, 2)"}), OutputFormat::Pretty).unwrap();
        assert!(table.contains("Field"));
        assert!(table.contains("Decimal(10, 2)"));
    }

    #[test]
    fn test_render_rows() {
        let value = json!([{"a": "1", "b": 2}, {"a": "3", "b": 4}]);
        let table = format_as_table(&value).unwrap();
        assert!(table.contains('a'));
        assert!(table.contains('4'));
        assert!(format_as_table(&json!([1, 2])).is_none());
    }

    #[test]
    fn test_json_output() {
        let out = render(&json!({"scale": 2}), OutputFormat::Json).unwrap();
        assert_eq!(out, "{\n  \"scale\": 2\n}");
    }
}
