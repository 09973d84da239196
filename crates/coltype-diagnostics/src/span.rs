//! Positions inside type declarations

use serde::{Deserialize, Serialize};
use std::fmt;

/// A byte range inside a declaration string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The declaration text this span covers, `None` when out of bounds
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

/// Where a parse error starts, as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// 1-based
    pub line: usize,
    /// 1-based, counted in characters
    pub column: usize,
    /// Byte offset into the declaration
    pub offset: usize,
}

impl SourceLocation {
    /// Locate byte `offset` of `source`; offsets past the end clamp to it
    pub fn at(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let before = source.get(..offset).unwrap_or(source);
        let line_start = before.rfind('\n').map_or(0, |nl| nl + 1);
        Self {
            line: before.matches('\n').count() + 1,
            column: before[line_start..].chars().count() + 1,
            offset,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A parsed value and the declaration text it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<T> {
    pub inner: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub const fn new(inner: T, span: Span) -> Self {
        Self { inner, span }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_slice() {
        let source = "Decimal(10, 2)";
        assert_eq!(Span::new(8, 10).slice(source), Some("10"));
        assert_eq!(Span::new(12, 13).slice(source), Some("2"));
        assert_eq!(Span::new(20, 30).slice(source), None);
    }

    #[test]
    fn test_location_across_lines() {
        let source = "Decimal(\n  10,\n  x)";
        let loc = SourceLocation::at(source, 17);
        assert_eq!((loc.line, loc.column, loc.offset), (3, 3, 17));
        assert_eq!(loc.to_string(), "3:3");

        assert_eq!(SourceLocation::at(source, 0).to_string(), "1:1");
        assert_eq!(SourceLocation::at(source, 9).to_string(), "2:1");
        assert_eq!(SourceLocation::at(source, 99).offset, source.len());
    }

    #[test]
    fn test_column_counts_characters() {
        // `é` is two bytes
        let loc = SourceLocation::at("Décimal(", 8);
        assert_eq!(loc.column, 8);
    }
}
