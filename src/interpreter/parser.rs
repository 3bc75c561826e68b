/// Entry points and shared parser definitions.
///
/// Contains the public `parse` and `parse_strict` functions, the top-level
/// expression rule and the parser result type.
pub mod core;

/// Binary operator parsing.
///
/// Implements precedence climbing over `+`, `-`, `*` and `/`.
pub mod binary;

/// Primary expression parsing.
///
/// Handles the operands of binary operators: numeric literals and
/// parenthesized sub-expressions.
pub mod primary;
