//! Data type declaration nodes

use crate::{Identifier, Literal, Spanned};
use smallvec::SmallVec;
use std::fmt;

/// One argument of a parameterised type, e.g. the `10` in `Decimal(10, 2)`
#[derive(Debug, Clone, PartialEq)]
pub enum TypeArgument {
    Literal(Literal),
    Identifier(Identifier),
}

impl TypeArgument {
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            TypeArgument::Literal(lit) => Some(lit),
            TypeArgument::Identifier(_) => None,
        }
    }
}

impl fmt::Display for TypeArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeArgument::Literal(lit) => lit.fmt(f),
            TypeArgument::Identifier(ident) => ident.fmt(f),
        }
    }
}

/// Argument list; decimal declarations never take more than two
pub type TypeArguments = SmallVec<[Spanned<TypeArgument>; 2]>;

/// A parsed declaration such as `Decimal(10, 2)`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDeclaration {
    pub name: Spanned<Identifier>,
    /// `None` for a bare name, `Some(empty)` for `Name()`
    pub arguments: Option<TypeArguments>,
}

impl TypeDeclaration {
    pub fn family_name(&self) -> &str {
        &self.name.inner.name
    }

    pub fn argument_count(&self) -> usize {
        self.arguments.as_ref().map_or(0, |args| args.len())
    }
}

impl fmt::Display for TypeDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name.inner)?;
        if let Some(args) = &self.arguments {
            f.write_str("(")?;
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", arg.inner)?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}
