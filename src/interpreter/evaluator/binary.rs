use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
};

/// Combines two evaluated operands with the operator written as `symbol`.
///
/// # Errors
/// [`EvalError::UnknownOperator`] if `symbol` names no operator, otherwise
/// whatever [`BinaryOperator::apply`] returns.
pub fn eval_binary(symbol: char, left: f64, right: f64) -> EvalResult<f64> {
    let Some(op) = BinaryOperator::from_symbol(symbol) else {
        log::debug!("unknown operator '{symbol}'");
        return Err(EvalError::UnknownOperator { symbol });
    };

    op.apply(left, right)
}

impl BinaryOperator {
    /// Applies the operator to two numbers.
    ///
    /// Division checks its divisor explicitly; `0.0` and `-0.0` both count as
    /// zero.
    ///
    /// # Example
    /// ```
    /// use treelab::{ast::BinaryOperator, error::EvalError};
    ///
    /// assert_eq!(BinaryOperator::Sub.apply(8.0, 3.0), Ok(5.0));
    /// assert_eq!(BinaryOperator::Div.apply(5.0, 0.0),
    ///            Err(EvalError::DivisionByZero));
    /// ```
    pub fn apply(self, left: f64, right: f64) -> EvalResult<f64> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right == 0.0 {
                    log::debug!("division of {left} by zero");
                    return Err(EvalError::DivisionByZero);
                }
                Ok(left / right)
            },
        }
    }
}
