//! # treelab
//!
//! treelab reads an infix arithmetic expression, parses it into a tree that
//! respects operator precedence, and evaluates the tree to a number.
//! Supported are non-negative decimal literals, the operators `+`, `-`, `*`,
//! `/` and parentheses.
//!
//! Parsing and evaluation both recurse. Parenthesis nesting is capped by
//! [`interpreter::parser::core::MAX_NESTING_DEPTH`]; a very long chain such as
//! `1 + 1 + ... + 1` produces a tree whose depth grows with its length, and
//! evaluating or dropping an extremely deep tree can exhaust the call stack.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Node` enum that represents an expression as a
/// tree, and the `BinaryOperator` table that the parser and evaluator agree
/// on. Trees are built by the parser and read by the evaluator.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// The two stages fail independently: [`error::ParseError`] describes
/// malformed input text, [`error::EvalError`] an unevaluable tree.
pub mod error;
/// Orchestrates the path from text to number.
///
/// This module ties together the cursor, number lexer, parser and evaluator.
///
/// # Responsibilities
/// - Provides entry points for parsing and evaluating expressions.
/// - Keeps parsing state local to a single call.
pub mod interpreter;

pub use interpreter::{
    evaluator::core::evaluate,
    parser::core::{parse, parse_strict},
};

/// Parses and evaluates `source`, returning the numeric result.
///
/// With `strict` set, anything but whitespace after the expression is an
/// error; otherwise it is ignored.
///
/// # Errors
/// Returns the first error from either parsing or evaluation.
///
/// # Examples
/// ```
/// use treelab::get_result;
///
/// assert_eq!(get_result("(2 + 3) * 4", false).unwrap(), 20.0);
///
/// // Division by zero parses fine but fails to evaluate.
/// assert!(get_result("5 / 0", false).is_err());
/// ```
pub fn get_result(source: &str, strict: bool) -> Result<f64, Box<dyn std::error::Error>> {
    let tree = if strict { parse_strict(source)? } else { parse(source)? };
    log::debug!("parsed tree {tree}");

    Ok(evaluate(&tree)?)
}

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
