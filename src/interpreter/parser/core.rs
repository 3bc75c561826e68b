use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{cursor::Cursor, parser::binary::parse_binary},
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest parenthesis nesting the parser accepts before giving up with
/// [`ParseError::NestingTooDeep`].
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses `text` into an expression tree.
///
/// Parsing stops after the first complete expression. Anything that follows
/// it, including a stray `)`, is left unread and does not cause an error; use
/// [`parse_strict`] to reject trailing input.
///
/// # Errors
/// Returns the first [`ParseError`] encountered. No partial tree is produced.
///
/// # Example
/// ```
/// use treelab::parse;
///
/// let tree = parse("2 + 3 * 4").unwrap();
/// assert_eq!(tree.to_string(), "(2 + (3 * 4))");
///
/// // The unmatched `)` is never consumed.
/// assert!(parse("1 + 2)").is_ok());
/// ```
pub fn parse(text: &str) -> ParseResult<Node> {
    log::debug!("parsing {text:?}");
    let mut cursor = Cursor::new(text);

    parse_expression(&mut cursor).inspect_err(|e| log::debug!("parse failed: {e}"))
}

/// Parses `text` and requires that nothing but whitespace follows the
/// expression.
///
/// # Errors
/// Everything [`parse`] can return, plus
/// [`ParseError::UnexpectedTrailingInput`] for leftover characters.
///
/// # Example
/// ```
/// use treelab::{error::ParseError, parse_strict};
///
/// assert!(parse_strict(" (1 + 2) ").is_ok());
/// assert_eq!(parse_strict("1 + 2)"),
///            Err(ParseError::UnexpectedTrailingInput { found:    ')',
///                                                      position: 5, }));
/// ```
pub fn parse_strict(text: &str) -> ParseResult<Node> {
    log::debug!("parsing {text:?} (strict)");
    let mut cursor = Cursor::new(text);

    let tree = parse_expression(&mut cursor)?;
    cursor.skip_whitespace();

    if let Some(found) = cursor.peek() {
        let position = cursor.position();
        log::debug!("trailing input '{found}' at {position}");
        return Err(ParseError::UnexpectedTrailingInput { found,
                                                         position });
    }

    Ok(tree)
}

/// Parses a full expression.
///
/// This is the top-level rule and the target of the recursion for
/// parenthesized groups. It starts precedence climbing with no precedence
/// floor, so every operator is accepted.
///
/// Grammar: `expression := binary(0)`
pub fn parse_expression(cursor: &mut Cursor<'_>) -> ParseResult<Node> {
    parse_binary(cursor, 0)
}
