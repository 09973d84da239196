//! Common parser combinators for declaration text

use coltype_ast::Literal;
use winnow::ascii::{digit0, digit1, multispace0};
use winnow::combinator::{alt, cut_err, delimited, opt, repeat};
use winnow::error::{ContextError, ErrMode, StrContext};
use winnow::prelude::*;
use winnow::token::{none_of, one_of, take_till, take_while};

pub(crate) type Input<'a> = &'a str;
pub(crate) type PResult<O> = winnow::ModalResult<O>;

/// Context label attached to number literals that lex but do not convert
pub(crate) const NUMBER_LABEL: &str = "number literal";

/// Skip optional whitespace
pub(crate) fn ws(input: &mut Input<'_>) -> PResult<()> {
    multispace0.void().parse_next(input)
}

/// A single punctuation character
pub(crate) fn symbol<'a>(c: char) -> impl Parser<Input<'a>, char, ErrMode<ContextError>> {
    c
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub(crate) fn identifier<'a>(input: &mut Input<'a>) -> PResult<&'a str> {
    (
        one_of(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
    )
        .take()
        .parse_next(input)
}

/// `"name"`, no escapes
pub(crate) fn quoted_identifier<'a>(input: &mut Input<'a>) -> PResult<&'a str> {
    delimited('"', take_till(0.., '"'), cut_err('"')).parse_next(input)
}

/// `'text'` where `''` stands for one quote
pub(crate) fn string_literal(input: &mut Input<'_>) -> PResult<String> {
    delimited(
        '\'',
        repeat(0.., alt((none_of('\''), "''".value('\'')))),
        cut_err('\''),
    )
    .parse_next(input)
}

/// Raw text of a number: `[+-]digits[.digits][(e|E)[+-]digits]`
fn number_text<'a>(input: &mut Input<'a>) -> PResult<&'a str> {
    (
        opt(one_of(['+', '-'])),
        digit1,
        opt(('.', digit0)),
        opt((one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1)),
    )
        .take()
        .parse_next(input)
}

/// A number literal tagged the way type creators expect it
pub(crate) fn number_literal(input: &mut Input<'_>) -> PResult<Literal> {
    number_text
        .verify_map(classify_number)
        .context(StrContext::Label(NUMBER_LABEL))
        .parse_next(input)
}

/// Unsigned integers become `UInt64`, negative ones `Int64`, anything with a
/// point or exponent `Float64`. Out of range integers are rejected.
pub(crate) fn classify_number(text: &str) -> Option<Literal> {
    if text.contains(['.', 'e', 'E']) {
        return text.parse::<f64>().ok().map(Literal::Float64);
    }
    if text.starts_with('-') {
        text.parse::<i64>().ok().map(Literal::Int64)
    } else {
        text.trim_start_matches('+')
            .parse::<u64>()
            .ok()
            .map(Literal::UInt64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_number() {
        assert_eq!(classify_number("10"), Some(Literal::UInt64(10)));
        assert_eq!(classify_number("+4"), Some(Literal::UInt64(4)));
        assert_eq!(classify_number("-2"), Some(Literal::Int64(-2)));
        assert_eq!(classify_number("1.5"), Some(Literal::Float64(1.5)));
        assert_eq!(classify_number("2e1"), Some(Literal::Float64(20.0)));
        assert_eq!(classify_number("18446744073709551616"), None);
        assert_eq!(classify_number("-9223372036854775809"), None);
    }

    #[test]
    fn test_number_literal_leaves_rest() {
        let mut input = "38, 2)";
        assert_eq!(number_literal(&mut input).ok(), Some(Literal::UInt64(38)));
        assert_eq!(input, ", 2)");
    }

    #[test]
    fn test_string_literal_escapes() {
        let mut input = "'it''s'";
        assert_eq!(string_literal(&mut input).ok().as_deref(), Some("it's"));
        assert!(input.is_empty());
    }

    #[test]
    fn test_identifier() {
        let mut input = "Decimal128(3)";
        assert_eq!(identifier(&mut input).ok(), Some("Decimal128"));
        assert_eq!(input, "(3)");

        let mut input = "9abc";
        assert!(identifier(&mut input).is_err());
    }
}
