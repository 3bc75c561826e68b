/// The cursor module tracks the shared parsing position.
///
/// A cursor is a view over the input text that can peek at the next character
/// without consuming it, consume characters and report end of input. All parser
/// routines for one `parse` call share and advance a single cursor.
pub mod cursor;
/// The evaluator module reduces expression trees to numbers.
///
/// The evaluator walks a tree in post-order, computing both operands of every
/// operator before combining them, and stops at the first failure.
///
/// # Responsibilities
/// - Evaluates constants and the four arithmetic operators.
/// - Reports division by zero and unknown operator tags.
pub mod evaluator;
/// The lexer module reads numeric literals.
///
/// The parser works on raw characters and has no token stream. The one place
/// where it needs a lexer is reading a complete decimal number starting at the
/// cursor, which this module provides.
pub mod lexer;
/// The parser module builds expression trees from text.
///
/// The parser is a recursive-descent parser that uses precedence climbing for
/// binary operators. It consumes characters directly from a [`cursor::Cursor`]
/// and never backtracks.
///
/// # Responsibilities
/// - Converts input text into a [`Node`](crate::ast::Node) tree.
/// - Respects operator precedence and left-associativity.
/// - Reports malformed input with the offending position.
pub mod parser;
