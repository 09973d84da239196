//! Declaration parser: `Name` or `Name(arg, ...)`

use crate::combinators::{
    NUMBER_LABEL, identifier, number_literal, quoted_identifier, string_literal, symbol, ws,
    Input, PResult,
};
use coltype_ast::{
    Identifier, Literal, Spanned, TypeArgument, TypeArguments, TypeDeclaration,
};
use coltype_diagnostics::{
    Result, SourceLocation, Span, TypeError, DEC0001, DEC0002, DEC0003,
};
use winnow::combinator::{cut_err, opt};
use winnow::error::{ContextError, ErrMode, StrContext};
use winnow::prelude::*;

/// Parse a data type declaration such as `Decimal(10, 2)`
///
/// Leading and trailing whitespace is ignored; anything else after the
/// closing parenthesis is an error.
pub fn parse_type_declaration(source: &str) -> Result<TypeDeclaration> {
    let mut input: Input<'_> = source;
    match declaration(&mut input, source) {
        Ok(decl) => Ok(decl),
        Err(err) => {
            let offset = source.len() - input.len();
            Err(to_type_error(&err, source, offset))
        }
    }
}

fn offset(source: &str, input: &Input<'_>) -> usize {
    source.len() - input.len()
}

fn declaration<'a>(input: &mut Input<'a>, source: &'a str) -> PResult<TypeDeclaration> {
    ws(input)?;
    let start = offset(source, input);
    let name = identifier(input)?;
    let name = Spanned::new(Identifier::new(name), Span::new(start, offset(source, input)));
    ws(input)?;

    let arguments = if input.starts_with('(') {
        Some(argument_list(input, source)?)
    } else {
        None
    };

    ws(input)?;
    if !input.is_empty() {
        return Err(ErrMode::Cut(ContextError::new()));
    }

    Ok(TypeDeclaration { name, arguments })
}

fn argument_list<'a>(input: &mut Input<'a>, source: &'a str) -> PResult<TypeArguments> {
    symbol('(').parse_next(input)?;
    ws(input)?;

    let mut arguments = TypeArguments::new();
    if opt(symbol(')')).parse_next(input)?.is_some() {
        return Ok(arguments);
    }

    loop {
        arguments.push(argument(input, source)?);
        ws(input)?;
        if opt(symbol(',')).parse_next(input)?.is_some() {
            ws(input)?;
            continue;
        }
        cut_err(symbol(')')).parse_next(input)?;
        return Ok(arguments);
    }
}

fn argument<'a>(input: &mut Input<'a>, source: &'a str) -> PResult<Spanned<TypeArgument>> {
    let start = offset(source, input);

    let value = if input.starts_with('\'') {
        TypeArgument::Literal(Literal::String(string_literal(input)?))
    } else if input.starts_with('"') {
        TypeArgument::Identifier(Identifier::quoted(quoted_identifier(input)?))
    } else if input.starts_with(|c: char| c.is_ascii_digit() || c == '+' || c == '-') {
        TypeArgument::Literal(number_literal(input)?)
    } else {
        let word = identifier(input)?;
        if word.eq_ignore_ascii_case("null") {
            TypeArgument::Literal(Literal::Null)
        } else {
            TypeArgument::Identifier(Identifier::new(word))
        }
    };

    Ok(Spanned::new(value, Span::new(start, offset(source, input))))
}

fn to_type_error(err: &ErrMode<ContextError>, source: &str, offset: usize) -> TypeError {
    let rest = &source[offset..];
    let Some(next) = rest.chars().next() else {
        let location = SourceLocation::at(source, offset);
        return TypeError::parse_at(DEC0002, "Unexpected end of input", source, location);
    };

    let is_number = match err {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => e
            .context()
            .any(|c| matches!(c, StrContext::Label(label) if *label == NUMBER_LABEL)),
        ErrMode::Incomplete(_) => false,
    };

    if is_number {
        let len = rest
            .find(|c: char| c == ',' || c == ')' || c.is_whitespace())
            .unwrap_or(rest.len());
        let location = SourceLocation::at(source, offset);
        TypeError::parse_at(
            DEC0003,
            format!("Cannot parse number literal `{}`", &rest[..len]),
            source,
            location,
        )
    } else {
        let location = SourceLocation::at(source, offset);
        TypeError::parse_at(DEC0001, format!("Unexpected '{next}'"), source, location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_name() {
        let decl = parse_type_declaration("  numeric ").unwrap();
        assert_eq!(decl.family_name(), "numeric");
        assert_eq!(decl.name.span, Span::new(2, 9));
        assert!(decl.arguments.is_none());
    }

    #[test]
    fn test_argument_spans() {
        let source = "Decimal( 10 ,2)";
        let decl = parse_type_declaration(source).unwrap();
        let args = decl.arguments.unwrap();
        assert_eq!(args[0].span.slice(source), Some("10"));
        assert_eq!(args[1].span.slice(source), Some("2"));
    }

    #[test]
    fn test_trailing_garbage() {
        let err = parse_type_declaration("Decimal(10) x").unwrap_err();
        assert_eq!(err.code(), DEC0001);
        assert_eq!(err.location().map(|l| l.offset), Some(12));
    }
}
