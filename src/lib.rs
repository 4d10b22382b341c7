//! # infixcalc
//!
//! infixcalc evaluates infix arithmetic and logical expressions over 64-bit
//! integers. An expression is first validated in one pass, then evaluated in
//! a second, independent pass by a two-stack precedence climbing engine that
//! understands both prefix and infix operators.
//!
//! ```
//! assert_eq!(infixcalc::evaluate("(4>=4) && 0"), Ok(0));
//! assert_eq!(infixcalc::evaluate("1+3 > 2"), Ok(1));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    error::EvalError,
    interpreter::{evaluator::core::Engine, validator::validate},
};

/// Provides unified error types for validation and evaluation.
///
/// This module defines every error that can be raised while checking or
/// evaluating an expression. Each error carries a human-readable message
/// and, where meaningful, the character offset of the defect.
///
/// # Responsibilities
/// - Defines syntax errors found by the validator.
/// - Defines runtime errors found by the evaluator.
/// - Combines both behind a single error type with a flat kind.
pub mod error;
/// Orchestrates tokenization, validation and evaluation.
///
/// This module ties together the lexer, the validator and the evaluator
/// engine. Each phase can be used on its own; [`evaluate`] chains them.
///
/// # Responsibilities
/// - Tokenizes expression text.
/// - Rejects malformed expressions with precise offsets.
/// - Evaluates well-formed expressions with two explicit stacks.
pub mod interpreter;
/// Operator spellings, precedences and roles.
///
/// This module declares the [`operator::Symbol`] enum and the
/// [`operator::OperatorToken`] that tags a symbol as prefix or infix.
///
/// # Responsibilities
/// - Holds the fixed precedence table.
/// - Says which symbols may act as prefixes.
pub mod operator;

/// Validates and evaluates an expression.
///
/// The expression is checked by
/// [`validate`](crate::interpreter::validator::validate) first; only when it
/// is well formed is it handed to a fresh
/// [`Engine`](crate::interpreter::evaluator::core::Engine). Nothing is kept
/// between calls.
///
/// # Errors
/// Returns [`EvalError::Syntax`] when the expression is malformed and
/// [`EvalError::Runtime`] when a division or modulo by zero occurs.
///
/// # Examples
/// ```
/// use infixcalc::{error::ErrorKind, evaluate};
///
/// assert_eq!(evaluate("1+2*3"), Ok(7));
/// assert_eq!(evaluate("1+-1"), Ok(0));
///
/// assert_eq!(evaluate("1**1").unwrap_err().kind(), ErrorKind::DuplicateOperator);
/// assert_eq!(evaluate("7 / (3 - 3)").unwrap_err().kind(), ErrorKind::DivisionByZero);
/// ```
pub fn evaluate(expression: &str) -> Result<i64, EvalError> {
    validate(expression)?;
    let value = Engine::new().run(expression)?;
    debug!("{expression:?} = {value}");
    Ok(value)
}

/// Stateless handle over [`evaluate`].
///
/// Useful where an object is more convenient than a free function, such as
/// an interactive loop that is handed an evaluator.
///
/// # Example
/// ```
/// use infixcalc::Evaluator;
///
/// let evaluator = Evaluator;
/// assert_eq!(evaluator.eval("(1+2)*3"), Ok(9));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Validates and evaluates `expression`. See [`evaluate`].
    pub fn eval(self, expression: &str) -> Result<i64, EvalError> {
        evaluate(expression)
    }
}
