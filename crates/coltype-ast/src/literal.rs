//! Literal arguments of type declarations

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic tag of a literal, used by type creators to validate arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    Null,
    UInt64,
    Int64,
    Float64,
    String,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::Null => "Null",
            FieldType::UInt64 => "UInt64",
            FieldType::Int64 => "Int64",
            FieldType::Float64 => "Float64",
            FieldType::String => "String",
        };
        f.write_str(name)
    }
}

/// A literal value in a declaration argument list
///
/// Unsigned integers parse as `UInt64`; only negative integers become `Int64`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Null,
    UInt64(u64),
    Int64(i64),
    Float64(f64),
    String(String),
}

impl Literal {
    pub fn field_type(&self) -> FieldType {
        match self {
            Literal::Null => FieldType::Null,
            Literal::UInt64(_) => FieldType::UInt64,
            Literal::Int64(_) => FieldType::Int64,
            Literal::Float64(_) => FieldType::Float64,
            Literal::String(_) => FieldType::String,
        }
    }

    /// True for `UInt64` and `Int64` literals
    pub fn is_integer(&self) -> bool {
        matches!(self, Literal::UInt64(_) | Literal::Int64(_))
    }

    /// Integer value widened to `i128`, so both signed and unsigned literals fit
    pub fn as_i128(&self) -> Option<i128> {
        match self {
            Literal::UInt64(v) => Some(i128::from(*v)),
            Literal::Int64(v) => Some(i128::from(*v)),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => f.write_str("NULL"),
            Literal::UInt64(v) => write!(f, "{v}"),
            Literal::Int64(v) => write!(f, "{v}"),
            Literal::Float64(v) => write!(f, "{v:?}"),
            Literal::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_tags() {
        assert_eq!(Literal::UInt64(10).field_type(), FieldType::UInt64);
        assert_eq!(Literal::Int64(-1).field_type(), FieldType::Int64);
        assert_eq!(Literal::String("x".into()).field_type(), FieldType::String);
        assert!(Literal::Int64(-1).is_integer());
        assert!(!Literal::Float64(1.5).is_integer());
    }

    #[test]
    fn test_integer_accessors() {
        assert!(Literal::UInt64(7).is_integer());
        assert!(!Literal::Float64(7.0).is_integer());
        assert_eq!(Literal::Int64(-3).as_i128(), Some(-3));
        assert_eq!(Literal::UInt64(u64::MAX).as_i128(), Some(u64::MAX as i128));
    }

    #[test]
    fn test_display() {
        assert_eq!(Literal::String("it's".into()).to_string(), "'it''s'");
        assert_eq!(Literal::Float64(2.0).to_string(), "2.0");
        assert_eq!(Literal::Null.to_string(), "NULL");
    }
}
