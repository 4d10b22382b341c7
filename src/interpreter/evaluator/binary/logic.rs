use crate::{
    interpreter::evaluator::{
        core::Engine,
        utils::{bool_to_int, is_truthy},
    },
    operator::Symbol,
};

impl Engine {
    /// Evaluates `&&` or `||` with nonzero-is-true semantics.
    ///
    /// Both operands were already reduced by the time the operator is
    /// applied, so nothing short-circuits.
    ///
    /// # Example
    /// ```
    /// use infixcalc::{interpreter::evaluator::core::Engine, operator::Symbol};
    ///
    /// assert_eq!(Engine::eval_logic(Symbol::AndAnd, 5, -2), 1);
    /// assert_eq!(Engine::eval_logic(Symbol::PipePipe, 0, 0), 0);
    /// ```
    #[must_use]
    pub fn eval_logic(symbol: Symbol, left: i64, right: i64) -> i64 {
        match symbol {
            Symbol::AndAnd => bool_to_int(is_truthy(left) && is_truthy(right)),
            Symbol::PipePipe => bool_to_int(is_truthy(left) || is_truthy(right)),
            _ => unreachable!("eval_logic used with non logical operator {symbol}"),
        }
    }
}
