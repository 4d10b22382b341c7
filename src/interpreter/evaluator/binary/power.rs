use crate::interpreter::evaluator::core::Engine;

impl Engine {
    /// Evaluates `base ^ exponent`.
    ///
    /// The result is `base` multiplied into `1` exactly `exponent` times, with
    /// wrapping overflow. A zero or negative exponent multiplies zero times
    /// and yields `1`.
    ///
    /// Square-and-multiply is used to get there; wrapping multiplication is
    /// associative, so the value is the same as the plain loop.
    ///
    /// # Example
    /// ```
    /// use infixcalc::interpreter::evaluator::core::Engine;
    ///
    /// assert_eq!(Engine::eval_pow(3, 2), 9);
    /// assert_eq!(Engine::eval_pow(5, 0), 1);
    /// assert_eq!(Engine::eval_pow(2, -1), 1);
    /// ```
    #[must_use]
    pub fn eval_pow(base: i64, exponent: i64) -> i64 {
        let Ok(mut exponent) = u64::try_from(exponent) else {
            return 1;
        };

        let mut base = base;
        let mut result = 1_i64;
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = result.wrapping_mul(base);
            }
            base = base.wrapping_mul(base);
            exponent >>= 1;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repeated(base: i64, exponent: i64) -> i64 {
        (0..exponent).fold(1_i64, |acc, _| acc.wrapping_mul(base))
    }

    #[test]
    fn matches_repeated_multiplication() {
        for (base, exponent) in [(2, 10), (-3, 5), (7, 0), (10, 19), (3, 64), (-1, 7)] {
            assert_eq!(Engine::eval_pow(base, exponent),
                       repeated(base, exponent),
                       "{base}^{exponent}");
        }
    }

    #[test]
    fn negative_exponent_is_one() {
        assert_eq!(Engine::eval_pow(0, -5), 1);
        assert_eq!(Engine::eval_pow(-8, i64::MIN), 1);
    }

    #[test]
    fn huge_exponent_terminates() {
        assert_eq!(Engine::eval_pow(1, i64::MAX), 1);
        assert_eq!(Engine::eval_pow(-1, i64::MAX), -1);
    }
}
