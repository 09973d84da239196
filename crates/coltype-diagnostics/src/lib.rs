//! Diagnostics for the coltype type system
//!
//! This crate provides the error handling infrastructure shared by the declaration
//! parser and the decimal type family: error codes, source spans and diagnostic
//! reporting.

mod error;
mod error_code;
mod span;

pub use error::*;
pub use error_code::*;
pub use span::*;

/// Result type for coltype operations
pub type Result<T> = std::result::Result<T, TypeError>;
