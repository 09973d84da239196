//! Fixed-point decimal data types for columnar engines
//!
//! This crate bundles the decimal type family:
//! - Parsing type declarations such as `Decimal(10, 2)` or `NUMERIC(20, 5)`
//! - Resolving them to 32, 64, 128 or 256-bit decimal types
//! - Parsing and formatting decimal literals with overflow checks
//!
//! # Example
//!
//! ```
//! use coltype::{DataTypeFactory, DecimalValue};
//!
//! let factory = DataTypeFactory::with_decimal_types()?;
//! let ty = factory.get("Decimal(10, 4)")?;
//! assert_eq!(ty.name(), "Decimal(10, 4)");
//! assert_eq!(ty.parse_from_string("123.45")?, DecimalValue::Decimal64(1_234_500));
//! # Ok::<(), coltype::TypeError>(())
//! ```

// Re-export all public APIs from internal crates
pub use coltype_ast as ast;
pub use coltype_diagnostics as diagnostics;
pub use coltype_parser as parser;
pub use coltype_types as types;

// Convenience re-exports
pub use coltype_ast::TypeDeclaration;
pub use coltype_diagnostics::{Result, TypeError};
pub use coltype_parser::parse_type_declaration;
pub use coltype_types::{
    create_decimal, DataTypeDecimal, DataTypeFactory, DataTypePtr, DecimalType, DecimalValue,
    DecimalWidth, FormatSettings,
};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
