use crate::{
    interpreter::evaluator::{core::Engine, utils::bool_to_int},
    operator::Symbol,
};

impl Engine {
    /// Evaluates a relational or equality operator, returning `1` or `0`.
    ///
    /// # Example
    /// ```
    /// use infixcalc::{interpreter::evaluator::core::Engine, operator::Symbol};
    ///
    /// assert_eq!(Engine::eval_comparison(Symbol::Less, 1, 2), 1);
    /// assert_eq!(Engine::eval_comparison(Symbol::EqualEqual, 1, 2), 0);
    /// ```
    #[must_use]
    pub fn eval_comparison(symbol: Symbol, left: i64, right: i64) -> i64 {
        bool_to_int(match symbol {
                        Symbol::Greater => left > right,
                        Symbol::GreaterEqual => left >= right,
                        Symbol::Less => left < right,
                        Symbol::LessEqual => left <= right,
                        Symbol::EqualEqual => left == right,
                        Symbol::BangEqual => left != right,
                        _ => unreachable!("eval_comparison used with non comparison operator {symbol}"),
                    })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(Engine::eval_comparison(Symbol::Greater, 4, 4), 0);
        assert_eq!(Engine::eval_comparison(Symbol::GreaterEqual, 4, 4), 1);
        assert_eq!(Engine::eval_comparison(Symbol::LessEqual, 5, 4), 0);
        assert_eq!(Engine::eval_comparison(Symbol::BangEqual, -1, 1), 1);
    }
}
