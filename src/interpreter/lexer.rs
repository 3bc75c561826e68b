use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{cursor::Cursor, parser::core::ParseResult},
};

/// The shapes a digit-led literal can take.
///
/// Only the first token of the remaining input is ever lexed; the longest
/// match decides between a complete number and a mantissa whose exponent was
/// left unfinished.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum NumberToken {
    /// Decimal literals such as `42`, `3.`, `2.5` or `6.02e23`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_finite)]
    Number(f64),
    /// A mantissa followed by an exponent marker without digits, such as `1e`
    /// or `2.5E+`.
    #[regex(r"[0-9]+(\.[0-9]*)?[eE][+-]?")]
    DanglingExponent,
}

/// Parses the current token slice, rejecting values that overflow to infinity.
fn parse_finite(lex: &logos::Lexer<NumberToken>) -> Option<f64> {
    lex.slice().parse().ok().filter(|value: &f64| value.is_finite())
}

/// Reads the longest numeric literal starting at the cursor.
///
/// On success the cursor is moved past the literal. Anything that does not
/// lex as a complete, finite [`NumberToken::Number`] fails with
/// [`ParseError::InvalidNumber`].
///
/// # Example
/// ```
/// use treelab::interpreter::{cursor::Cursor, lexer::scan_number};
///
/// let mut cursor = Cursor::new("2.5e2 + 1");
/// assert_eq!(scan_number(&mut cursor).unwrap(), 250.0);
/// assert_eq!(cursor.rest(), " + 1");
/// ```
pub fn scan_number(cursor: &mut Cursor<'_>) -> ParseResult<f64> {
    let position = cursor.position();
    let mut lexer = NumberToken::lexer(cursor.rest());

    if let Some(Ok(NumberToken::Number(value))) = lexer.next() {
        cursor.advance(lexer.span().end);
        log::trace!("scanned number {value} at {position}");
        return Ok(value);
    }

    let literal = lexer.slice().to_string();
    log::debug!("invalid number literal '{literal}' at {position}");
    Err(ParseError::InvalidNumber { literal,
                                    position })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::scan_number;
    use crate::{error::ParseError, interpreter::cursor::Cursor};

    fn scan(source: &str) -> (Result<f64, ParseError>, usize) {
        let mut cursor = Cursor::new(source);
        let result = scan_number(&mut cursor);
        (result, cursor.position())
    }

    #[test]
    fn integers_and_decimals() {
        assert_eq!(scan("42"), (Ok(42.0), 2));
        assert_eq!(scan("3.25)"), (Ok(3.25), 4));
        assert_eq!(scan("7.+1"), (Ok(7.0), 2));
    }

    #[test]
    fn exponents_are_part_of_the_literal() {
        assert_eq!(scan("1e3*2"), (Ok(1000.0), 3));
        assert_eq!(scan("5E-1"), (Ok(0.5), 4));
    }

    #[test]
    fn stops_at_the_first_non_numeric_character() {
        assert_eq!(scan("12 34"), (Ok(12.0), 2));
        assert_eq!(scan("1.2.3"), (Ok(1.2), 3));
    }

    #[test]
    fn dangling_exponent_is_invalid() {
        let (result, _) = scan("1e+");
        assert_eq!(result,
                   Err(ParseError::InvalidNumber { literal:  "1e+".to_string(),
                                                   position: 0, }));
    }

    #[test]
    fn overflowing_literal_is_invalid() {
        let (result, _) = scan("1e400");
        assert!(matches!(result, Err(ParseError::InvalidNumber { .. })));
    }

    #[test]
    fn bare_dot_is_invalid() {
        let (result, position) = scan(".");
        assert!(matches!(result, Err(ParseError::InvalidNumber { position: 0, .. })));
        assert_eq!(position, 0);
    }
}
