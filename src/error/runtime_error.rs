#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while reducing the stacks.
pub enum RuntimeError {
    /// `/` or `%` was applied with a zero right-hand operand.
    DivisionByZero {
        /// Cursor position when the operator was applied. This trails the
        /// operator itself: the divisor and whatever token triggered the
        /// reduction have already been consumed.
        offset: usize,
    },
}

impl RuntimeError {
    /// Returns the character offset recorded with the error.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::DivisionByZero { offset } => *offset,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { offset } => {
                write!(f, "Error at char {offset}: Division by zero.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
