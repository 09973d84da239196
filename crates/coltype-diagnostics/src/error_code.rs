//! Error codes following a structured numbering system
//!
//! Error code ranges:
//! - DEC0001-DEC0099: Parse errors (declaration syntax)
//! - DEC0100-DEC0199: Type errors (declaration validation, registry)
//! - DEC0200-DEC0299: Value errors (literal conversion)
//! - DEC0400-DEC0499: System errors

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a parse error (0001-0099)
    pub const fn is_parse_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a type error (0100-0199)
    pub const fn is_type_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a value error (0200-0299)
    pub const fn is_value_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Check if this is a system error (0400-0499)
    pub const fn is_system_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DEC{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Parse errors (0001-0099)
    map.insert(1, ErrorInfo::new("Unexpected token"));
    map.insert(2, ErrorInfo::new("Unexpected end of input"));
    map.insert(3, ErrorInfo::new("Cannot parse number")
        .with_help("Decimal literals look like -123.45 or 1.5e3"));

    // Type errors (0100-0199)
    map.insert(100, ErrorInfo::new("Unknown data type"));
    map.insert(101, ErrorInfo::new("Number of arguments doesn't match")
        .with_help("Decimal takes (precision[, scale]); Decimal32..Decimal256 take (scale)"));
    map.insert(102, ErrorInfo::new("Illegal type of argument")
        .with_help("Precision must be an unsigned integer literal, scale an integer literal"));
    map.insert(103, ErrorInfo::new("Argument out of bound")
        .with_help("Precision must be in 1..=76 and scale in 0..=precision"));
    map.insert(104, ErrorInfo::new("Data type is already registered"));

    // Value errors (0200-0299)
    map.insert(200, ErrorInfo::new("Decimal math overflow"));
    map.insert(201, ErrorInfo::new("Too many digits in decimal value"));
    map.insert(202, ErrorInfo::new("Cannot read binary decimal value"));

    // System errors (0400-0499)
    map.insert(400, ErrorInfo::new("Internal error"));

    map
});

// Parse errors
pub const DEC0001: ErrorCode = ErrorCode::new(1);
pub const DEC0002: ErrorCode = ErrorCode::new(2);
pub const DEC0003: ErrorCode = ErrorCode::new(3);

// Type errors
pub const DEC0100: ErrorCode = ErrorCode::new(100);
pub const DEC0101: ErrorCode = ErrorCode::new(101);
pub const DEC0102: ErrorCode = ErrorCode::new(102);
pub const DEC0103: ErrorCode = ErrorCode::new(103);
pub const DEC0104: ErrorCode = ErrorCode::new(104);

// Value errors
pub const DEC0200: ErrorCode = ErrorCode::new(200);
pub const DEC0201: ErrorCode = ErrorCode::new(201);
pub const DEC0202: ErrorCode = ErrorCode::new(202);

// System errors
pub const DEC0400: ErrorCode = ErrorCode::new(400);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(DEC0001.to_string(), "DEC0001");
        assert_eq!(DEC0200.to_string(), "DEC0200");
    }

    #[test]
    fn test_error_categories() {
        assert!(DEC0003.is_parse_error());
        assert!(!DEC0003.is_type_error());

        assert!(DEC0101.is_type_error());
        assert!(DEC0201.is_value_error());
        assert!(DEC0400.is_system_error());
    }

    #[test]
    fn test_error_info() {
        assert_eq!(DEC0200.info().description, "Decimal math overflow");
        assert!(DEC0103.info().help.is_some());
        assert_eq!(ErrorCode::new(999).info().description, "Unknown error");
    }
}
