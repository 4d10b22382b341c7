use crate::error::{RuntimeError, SyntaxError};

/// Flat classification of every failure [`crate::evaluate`] can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`SyntaxError::EmptyInput`].
    EmptyInput,
    /// See [`SyntaxError::LeadingCloseParen`].
    LeadingCloseParen,
    /// See [`SyntaxError::LeadingBinaryOperator`].
    LeadingBinaryOperator,
    /// See [`SyntaxError::UnmatchedParenthesis`].
    UnmatchedParenthesis,
    /// See [`SyntaxError::DuplicateOperand`].
    DuplicateOperand,
    /// See [`SyntaxError::DuplicateOperator`].
    DuplicateOperator,
    /// See [`SyntaxError::InvalidCharacter`].
    InvalidCharacter,
    /// See [`RuntimeError::DivisionByZero`].
    DivisionByZero,
}

/// Error returned by a single evaluation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// The expression was rejected before evaluation started.
    Syntax(SyntaxError),
    /// The expression was well formed but could not be computed.
    Runtime(RuntimeError),
}

impl EvalError {
    /// Returns the kind of failure, independent of where it happened.
    ///
    /// # Example
    /// ```
    /// use infixcalc::{error::ErrorKind, evaluate};
    ///
    /// let err = evaluate("1 1").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DuplicateOperand);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax(SyntaxError::EmptyInput) => ErrorKind::EmptyInput,
            Self::Syntax(SyntaxError::LeadingCloseParen { .. }) => ErrorKind::LeadingCloseParen,
            Self::Syntax(SyntaxError::LeadingBinaryOperator { .. }) => {
                ErrorKind::LeadingBinaryOperator
            },
            Self::Syntax(SyntaxError::UnmatchedParenthesis { .. }) => {
                ErrorKind::UnmatchedParenthesis
            },
            Self::Syntax(SyntaxError::DuplicateOperand { .. }) => ErrorKind::DuplicateOperand,
            Self::Syntax(SyntaxError::DuplicateOperator { .. }) => ErrorKind::DuplicateOperator,
            Self::Syntax(SyntaxError::InvalidCharacter { .. }) => ErrorKind::InvalidCharacter,
            Self::Runtime(RuntimeError::DivisionByZero { .. }) => ErrorKind::DivisionByZero,
        }
    }

    /// Returns the character offset of the failure, when one is meaningful.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::Syntax(e) => e.offset(),
            Self::Runtime(e) => Some(e.offset()),
        }
    }
}

impl From<SyntaxError> for EvalError {
    fn from(value: SyntaxError) -> Self {
        Self::Syntax(value)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
