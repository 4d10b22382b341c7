use crate::{
    interpreter::evaluator::core::{Engine, EvalResult},
    operator::Symbol,
};

impl Engine {
    /// Evaluates an infix operation between two values.
    ///
    /// Routes the operation to the arithmetic, power, comparison or logic
    /// handler. `offset` is only used to locate a division by zero.
    ///
    /// `!`, `++` and `--` have no infix meaning; applied between two operands
    /// they evaluate to `0`.
    ///
    /// # Errors
    /// Returns [`crate::error::RuntimeError::DivisionByZero`] for `/` and `%`
    /// with a zero right operand.
    ///
    /// # Example
    /// ```
    /// use infixcalc::{interpreter::evaluator::core::Engine, operator::Symbol};
    ///
    /// assert_eq!(Engine::eval_binary(Symbol::Minus, 10, 4, 0), Ok(6));
    /// assert_eq!(Engine::eval_binary(Symbol::GreaterEqual, 4, 4, 0), Ok(1));
    /// assert!(Engine::eval_binary(Symbol::Percent, 1, 0, 3).is_err());
    /// ```
    pub fn eval_binary(symbol: Symbol, left: i64, right: i64, offset: usize) -> EvalResult<i64> {
        use Symbol::{
            AndAnd, Bang, BangEqual, Caret, EqualEqual, Greater, GreaterEqual, Less, LessEqual,
            Minus, MinusMinus, Percent, PipePipe, Plus, PlusPlus, Slash, Star,
        };

        match symbol {
            Plus | Minus | Star | Slash | Percent => {
                Self::eval_arithmetic(symbol, left, right, offset)
            },

            Caret => Ok(Self::eval_pow(left, right)),

            Greater | GreaterEqual | Less | LessEqual | EqualEqual | BangEqual => {
                Ok(Self::eval_comparison(symbol, left, right))
            },

            AndAnd | PipePipe => Ok(Self::eval_logic(symbol, left, right)),

            Bang | PlusPlus | MinusMinus => Ok(0),
        }
    }
}
