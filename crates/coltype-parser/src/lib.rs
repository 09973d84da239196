//! Parser for data type declarations using Winnow
//!
//! Turns text such as `Decimal(10, 2)` or `numeric` into a
//! [`TypeDeclaration`](coltype_ast::TypeDeclaration). The parser only checks
//! syntax; whether the arguments make sense is up to the type creators.

mod combinators;
mod declaration;

pub use declaration::parse_type_declaration;
