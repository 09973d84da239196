//! Parse command implementation

use super::output::{self, OutputFormat};
use crate::{DataTypeFactory, DecimalType, FormatSettings};
use anyhow::{bail, Result};
use log::{debug, warn};
use serde_json::{json, Value};

/// Configuration for parse command
pub struct ParseConfig {
    pub declaration: String,
    pub literals: Vec<String>,
    pub format: OutputFormat,
    pub settings: FormatSettings,
}

/// Parse literals against a declared type
///
/// Every literal is attempted; failures are reported as diagnostics and make
/// the command fail once all literals have been processed.
pub fn parse(config: ParseConfig) -> Result<()> {
    if config.literals.is_empty() {
        bail!("No literals given for {}", config.declaration);
    }

    let factory = DataTypeFactory::with_decimal_types()?;
    let ty = factory.get(&config.declaration)?;
    debug!("parsing {} literal(s) as {}", config.literals.len(), ty.name());

    let mut rows = Vec::with_capacity(config.literals.len());
    let mut failures = 0;
    for literal in &config.literals {
        match parse_literal(&ty, literal, &config.settings) {
            Ok(row) => rows.push(row),
            Err(err) => {
                warn!("{literal}: {err}");
                eprintln!("{}", output::format_type_error(&err));
                failures += 1;
            }
        }
    }

    if !rows.is_empty() {
        output::print_output(&Value::Array(rows), config.format)?;
    }
    if failures > 0 {
        bail!("{failures} of {} literal(s) could not be parsed as {}", config.literals.len(), ty.name());
    }
    Ok(())
}

/// Parse one literal, returning the raw value, its formatted text and binary form
pub fn parse_literal(
    ty: &DecimalType,
    literal: &str,
    settings: &FormatSettings,
) -> crate::Result<Value> {
    let serialization = ty.default_serialization();
    let value = serialization.deserialize_text(literal)?;
    let text = serialization.serialize_text(&value, settings)?;
    let mut binary = Vec::new();
    serialization.serialize_binary(&value, &mut binary)?;
    let hex: String = binary.iter().map(|b| format!("{b:02x}")).collect();

    Ok(json!({
        "literal": literal,
        "raw": value.to_string(),
        "text": text,
        "binary": hex,
    }))
}
