/// Parsing errors.
///
/// Defines every way that turning input text into an expression tree can
/// fail: characters that start no operand, unbalanced parentheses, malformed
/// numeric literals and leftover input in strict mode.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors raised while reducing a well-formed tree to a number,
/// such as division by zero or an operator tag the evaluator does not know.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
