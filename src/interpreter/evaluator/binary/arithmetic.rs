use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::{Engine, EvalResult},
    operator::Symbol,
};

impl Engine {
    /// Evaluates `+`, `-`, `*`, `/` or `%`.
    ///
    /// Division truncates toward zero and the remainder takes the sign of the
    /// dividend. Overflow wraps, including `i64::MIN / -1`.
    ///
    /// # Errors
    /// `/` and `%` with a zero `right` fail with
    /// [`RuntimeError::DivisionByZero`] at `offset`.
    ///
    /// # Example
    /// ```
    /// use infixcalc::{interpreter::evaluator::core::Engine, operator::Symbol};
    ///
    /// assert_eq!(Engine::eval_arithmetic(Symbol::Slash, -7, 2, 0), Ok(-3));
    /// assert_eq!(Engine::eval_arithmetic(Symbol::Percent, -7, 2, 0), Ok(-1));
    /// ```
    pub fn eval_arithmetic(symbol: Symbol,
                           left: i64,
                           right: i64,
                           offset: usize)
                           -> EvalResult<i64> {
        match symbol {
            Symbol::Plus => Ok(left.wrapping_add(right)),
            Symbol::Minus => Ok(left.wrapping_sub(right)),
            Symbol::Star => Ok(left.wrapping_mul(right)),
            Symbol::Slash | Symbol::Percent if right == 0 => {
                Err(RuntimeError::DivisionByZero { offset })
            },
            Symbol::Slash => Ok(left.wrapping_div(right)),
            Symbol::Percent => Ok(left.wrapping_rem(right)),
            _ => unreachable!("eval_arithmetic used with non arithmetic operator {symbol}"),
        }
    }
}
