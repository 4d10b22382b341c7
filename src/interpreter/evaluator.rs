/// Binary operator evaluation logic.
///
/// Handles every operation applied to a left and a right operand: arithmetic,
/// power, comparisons and logical connectives.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the prefix operators: plus, negation, logical NOT, increment
/// and decrement.
pub mod unary;

/// The two-stack engine.
///
/// Contains the operand and operator stacks, the precedence-driven reduction
/// loop and the lenient apply step.
pub mod core;

/// Utility functions for evaluation.
///
/// Provides truthiness helpers shared by the unary and binary operators.
pub mod utils;
