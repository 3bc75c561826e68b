#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression tree.
pub enum EvalError {
    /// The right operand of a division evaluated to zero.
    DivisionByZero,
    /// A `BinaryOp` node carried an operator symbol outside `+ - * /`.
    UnknownOperator {
        /// The unrecognized symbol.
        symbol: char,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::UnknownOperator { symbol } => write!(f, "Unknown operator '{symbol}'."),
        }
    }
}

impl std::error::Error for EvalError {}
