/// Dispatch from a symbol to the family of operations it belongs to.
pub mod core;

/// `+`, `-`, `*`, `/` and `%`.
pub mod arithmetic;

/// `^` by repeated multiplication.
pub mod power;

/// `>`, `>=`, `<`, `<=`, `==` and `!=`.
pub mod comparison;

/// `&&` and `||`.
pub mod logic;
