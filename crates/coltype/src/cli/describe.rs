//! Describe command implementation

use super::output::{self, OutputFormat};
use crate::{DataTypeFactory, DecimalType};
use anyhow::Result;
use log::info;
use serde_json::{json, Value};

/// Configuration for describe command
pub struct DescribeConfig {
    pub declaration: String,
    pub format: OutputFormat,
}

/// Resolve a declaration and print what it turns into
pub fn describe(config: DescribeConfig) -> Result<()> {
    let factory = DataTypeFactory::with_decimal_types()?;
    let ty = factory.get(&config.declaration)?;
    info!("{} resolved to {}", config.declaration, ty.name());
    output::print_output(&describe_type(&ty), config.format)
}

/// JSON description of a resolved type
pub fn describe_type(ty: &DecimalType) -> Value {
    json!({
        "name": ty.name(),
        "sql_name": ty.sql_compatible_name(),
        "width": ty.width().family_name(),
        "bits": ty.width().bits(),
        "precision": ty.precision(),
        "max_precision": ty.max_precision(),
        "scale": ty.scale(),
        "promoted": ty.promote_numeric_type().name(),
    })
}
