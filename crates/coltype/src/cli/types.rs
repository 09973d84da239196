//! Types command implementation

use super::output::{self, OutputFormat};
use crate::DataTypeFactory;
use anyhow::Result;
use serde_json::{json, Value};

/// List registered type families and their aliases
pub fn types(format: OutputFormat) -> Result<()> {
    let factory = DataTypeFactory::with_decimal_types()?;
    output::print_output(&list_types(&factory), format)
}

/// One row per family, with the aliases pointing at it
pub fn list_types(factory: &DataTypeFactory) -> Value {
    let rows = factory
        .registered_names()
        .map(|name| {
            let aliases: Vec<&str> = factory
                .aliases()
                .filter(|(_, target)| *target == name)
                .map(|(alias, _)| alias)
                .collect();
            json!({ "name": name, "aliases": aliases })
        })
        .collect();
    Value::Array(rows)
}
