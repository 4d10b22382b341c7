use crate::{
    interpreter::evaluator::{core::Engine, utils::bool_to_int},
    operator::Symbol,
};

impl Engine {
    /// Evaluates a prefix operator on a value.
    ///
    /// Supported operators:
    /// - `+a` returns `a` unchanged.
    /// - `-a` negates.
    /// - `!a` is `1` when `a` is zero and `0` otherwise.
    /// - `++a` and `--a` add or subtract one. There are no variables, so
    ///   nothing is stored back.
    ///
    /// Symbols that cannot be prefixes leave the value unchanged.
    ///
    /// # Example
    /// ```
    /// use infixcalc::{interpreter::evaluator::core::Engine, operator::Symbol};
    ///
    /// assert_eq!(Engine::eval_unary(Symbol::Minus, 5), -5);
    /// assert_eq!(Engine::eval_unary(Symbol::Bang, 0), 1);
    /// assert_eq!(Engine::eval_unary(Symbol::PlusPlus, 1), 2);
    /// ```
    #[must_use]
    pub fn eval_unary(symbol: Symbol, value: i64) -> i64 {
        match symbol {
            Symbol::Minus => value.wrapping_neg(),
            Symbol::Bang => bool_to_int(value == 0),
            Symbol::PlusPlus => value.wrapping_add(1),
            Symbol::MinusMinus => value.wrapping_sub(1),
            _ => value,
        }
    }
}
