//! Syntax tree for data type declarations
//!
//! A declaration is a type family name optionally followed by a parenthesised
//! list of literal arguments, e.g. `Decimal(10, 2)` or `Decimal64(4)`.

mod literal;
mod types;

pub use literal::*;
pub use types::*;

use std::fmt;

/// A node with source span information
pub type Spanned<T> = coltype_diagnostics::Spanned<T>;

/// An identifier, bare or double-quoted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
    /// Whether this is a quoted (delimited) identifier
    pub quoted: bool,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quoted: false,
        }
    }

    pub fn quoted(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quoted: true,
        }
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quoted {
            write!(f, "\"{}\"", self.name)
        } else {
            f.write_str(&self.name)
        }
    }
}
