/// Binary operator evaluation.
///
/// Applies `+`, `-`, `*` and `/` to evaluated operands and rejects operator
/// tags it does not recognize.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the recursive tree walk and the evaluator result type.
pub mod core;
