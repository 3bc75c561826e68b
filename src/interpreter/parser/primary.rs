use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        cursor::Cursor,
        lexer::scan_number,
        parser::core::{MAX_NESTING_DEPTH, ParseResult, parse_expression},
    },
};

/// Parses a primary (atomic) expression.
///
/// Leading whitespace is skipped. A decimal digit starts a numeric literal and
/// `(` starts a parenthesized expression. Any other character, and the end of
/// input, is rejected.
///
/// Grammar:
/// ```text
///     primary := number
///              | "(" expression ")"
/// ```
///
/// # Errors
/// [`ParseError::UnexpectedCharacter`] when no operand starts at the cursor,
/// plus anything raised by [`parse_number`] or [`parse_grouping`].
pub fn parse_primary(cursor: &mut Cursor<'_>) -> ParseResult<Node> {
    cursor.skip_whitespace();

    match cursor.peek() {
        Some(c) if c.is_ascii_digit() => parse_number(cursor),
        Some('(') => parse_grouping(cursor),
        found => {
            let position = cursor.position();
            log::debug!("expected a number or '(' at {position}, found {found:?}");
            Err(ParseError::UnexpectedCharacter { found,
                                                  position })
        },
    }
}

/// Parses a numeric literal into a [`Node::Constant`].
pub fn parse_number(cursor: &mut Cursor<'_>) -> ParseResult<Node> {
    scan_number(cursor).map(Node::Constant)
}

/// Parses a parenthesized expression of the form `( expression )`.
///
/// The cursor must be positioned at `(`. The parentheses themselves leave no
/// trace in the tree; the inner expression is returned as is.
///
/// # Errors
/// - [`ParseError::MismatchedParentheses`] if the inner expression is not
///   followed by `)`.
/// - [`ParseError::NestingTooDeep`] if more than [`MAX_NESTING_DEPTH`] groups
///   would be open at once.
pub fn parse_grouping(cursor: &mut Cursor<'_>) -> ParseResult<Node> {
    if cursor.depth() >= MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { position: cursor.position() });
    }

    cursor.bump(); // consume '('
    cursor.enter_group();

    let expr = parse_expression(cursor)?;
    cursor.skip_whitespace();

    let position = cursor.position();
    if cursor.bump() != Some(')') {
        log::debug!("expected ')' at {position}");
        return Err(ParseError::MismatchedParentheses { position });
    }
    cursor.leave_group();

    Ok(expr)
}
