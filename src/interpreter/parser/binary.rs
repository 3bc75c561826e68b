use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        cursor::Cursor,
        parser::{core::ParseResult, primary::parse_primary},
    },
};

/// Parses a chain of binary operations using precedence climbing.
///
/// A primary operand is read first. Then, as long as the next character is an
/// operator whose precedence is at least `min_precedence`, the operator is
/// consumed and its right operand is parsed by a recursive call with the
/// floor raised to `precedence + 1`. Raising the floor keeps operators of the
/// same precedence out of the right operand, so they are picked up by the next
/// iteration here and group to the left: `8 - 3 - 2` is `(8 - 3) - 2`.
///
/// An operator below the floor, or any character that is not an operator,
/// ends the chain and is left for the caller.
///
/// Grammar:
/// ```text
///     binary(p) := primary { op binary(prec(op) + 1) }   where prec(op) >= p
/// ```
///
/// # Parameters
/// - `cursor`: Shared parsing position.
/// - `min_precedence`: Weakest operator this call may absorb.
///
/// # Returns
/// The accumulated left operand once the chain ends.
pub fn parse_binary(cursor: &mut Cursor<'_>, min_precedence: u8) -> ParseResult<Node> {
    let mut left = parse_primary(cursor)?;
    cursor.skip_whitespace();

    while let Some(op) = peek_operator(cursor)
          && op.precedence() >= min_precedence
    {
        cursor.bump();
        let right = parse_binary(cursor, op.precedence() + 1)?;
        left = Node::binary(op.symbol(), left, right);
        cursor.skip_whitespace();
    }

    Ok(left)
}

/// Returns the operator at the cursor without consuming it.
///
/// # Example
/// ```
/// use treelab::{
///     ast::BinaryOperator,
///     interpreter::{cursor::Cursor, parser::binary::peek_operator},
/// };
///
/// assert_eq!(peek_operator(&Cursor::new("* 2")), Some(BinaryOperator::Mul));
/// assert_eq!(peek_operator(&Cursor::new(")")), None);
/// ```
#[must_use]
pub fn peek_operator(cursor: &Cursor<'_>) -> Option<BinaryOperator> {
    cursor.peek().and_then(BinaryOperator::from_symbol)
}
