use crate::{ast::Node, error::EvalError, interpreter::evaluator::binary::eval_binary};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression tree and returns its numeric value.
///
/// The tree is walked in post-order: the left subtree, then the right subtree,
/// then the operator joining them. The first error aborts the walk and is
/// returned unchanged. Evaluation only reads the tree, so evaluating the same
/// tree again gives the same result.
///
/// # Errors
/// - [`EvalError::DivisionByZero`] if a divisor evaluates to zero.
/// - [`EvalError::UnknownOperator`] for a node whose symbol is not one of
///   `+`, `-`, `*`, `/`.
///
/// # Example
/// ```
/// use treelab::{ast::Node, error::EvalError, evaluate};
///
/// let tree = Node::binary('*', Node::constant(6.0), Node::constant(7.0));
/// assert_eq!(evaluate(&tree), Ok(42.0));
///
/// let tree = Node::binary('%', Node::constant(6.0), Node::constant(7.0));
/// assert_eq!(evaluate(&tree), Err(EvalError::UnknownOperator { symbol: '%' }));
/// ```
pub fn evaluate(node: &Node) -> EvalResult<f64> {
    match node {
        Node::Constant(value) => Ok(*value),
        Node::BinaryOp { symbol, left, right } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            eval_binary(*symbol, left, right)
        },
    }
}
