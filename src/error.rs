/// Syntax errors.
///
/// Defines every defect the validator can find in an expression before any
/// evaluation happens: empty input, misplaced parentheses and operators,
/// adjacent operands and characters that are not part of the language.
pub mod syntax_error;
/// Runtime errors.
///
/// Contains the errors that can only be raised while the operand and operator
/// stacks are being reduced, such as division by zero.
pub mod runtime_error;
/// The combined error returned by [`crate::evaluate`].
///
/// Wraps syntax and runtime errors and exposes a flat [`ErrorKind`] plus the
/// character offset of the defect, when there is one.
pub mod eval_error;

pub use eval_error::{ErrorKind, EvalError};
pub use runtime_error::RuntimeError;
pub use syntax_error::{SyntaxError, SyntaxResult};
