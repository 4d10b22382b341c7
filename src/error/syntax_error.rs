use crate::operator::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that the validator can report.
///
/// Offsets count characters from the start of the expression, starting at
/// zero.
pub enum SyntaxError {
    /// The expression was the empty string.
    EmptyInput,
    /// The first token of the expression is `)`.
    LeadingCloseParen {
        /// Always `0`: the defect is reported against the start of input.
        offset: usize,
    },
    /// The first token of the expression is an operator that cannot be used
    /// as a prefix, such as `*`.
    LeadingBinaryOperator {
        /// The offending operator.
        operator: Symbol,
        /// Always `0`: the defect is reported against the start of input.
        offset:   usize,
    },
    /// Parentheses do not balance.
    UnmatchedParenthesis {
        /// Position of a `)` that closes nothing, or `None` when the scan
        /// ended with groups still open.
        offset: Option<usize>,
    },
    /// Two numbers follow each other with nothing but whitespace or a closed
    /// group between them.
    DuplicateOperand {
        /// Start of the second number.
        offset: usize,
    },
    /// An operator directly follows another operator and cannot act as a
    /// prefix.
    DuplicateOperator {
        /// The second operator.
        operator: Symbol,
        /// Start of the second operator.
        offset:   usize,
    },
    /// A character that is not a digit, whitespace, an operator or a
    /// parenthesis.
    InvalidCharacter {
        /// The character found.
        character: char,
        /// Position of the character.
        offset:    usize,
    },
}

impl SyntaxError {
    /// Returns the character offset of the defect, if the error has one.
    ///
    /// # Example
    /// ```
    /// use infixcalc::error::SyntaxError;
    ///
    /// assert_eq!(SyntaxError::DuplicateOperand { offset: 2 }.offset(), Some(2));
    /// assert_eq!(SyntaxError::EmptyInput.offset(), None);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::EmptyInput => None,
            Self::UnmatchedParenthesis { offset } => *offset,
            Self::LeadingCloseParen { offset }
            | Self::LeadingBinaryOperator { offset, .. }
            | Self::DuplicateOperand { offset }
            | Self::DuplicateOperator { offset, .. }
            | Self::InvalidCharacter { offset, .. } => Some(*offset),
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Error: Empty expression."),

            Self::LeadingCloseParen { offset } => write!(f,
                                                         "Error at char {offset}: Expression can't start with a closing parenthesis."),

            Self::LeadingBinaryOperator { operator, offset } => write!(f,
                                                                       "Error at char {offset}: Expression can't start with the binary operator '{operator}'."),

            Self::UnmatchedParenthesis { offset: Some(offset) } => {
                write!(f, "Error at char {offset}: Mismatched parentheses.")
            },
            Self::UnmatchedParenthesis { offset: None } => {
                write!(f, "Error: Mismatched parentheses.")
            },

            Self::DuplicateOperand { offset } => {
                write!(f, "Error at char {offset}: Two operands in a row.")
            },

            Self::DuplicateOperator { operator, offset } => write!(f,
                                                                   "Error at char {offset}: Two binary operators in a row, '{operator}' can't follow an operator."),

            Self::InvalidCharacter { character, offset } => {
                write!(f, "Error at char {offset}: Invalid character '{character}'.")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Result type used by the tokenizer and the validator.
pub type SyntaxResult<T> = Result<T, SyntaxError>;
