/// The evaluator module reduces a validated expression to an integer.
///
/// The evaluator rescans the expression with its own tokenizer, keeps an
/// operand stack and an operator stack, and applies operators in precedence
/// order. It is the core execution engine of the crate.
///
/// # Responsibilities
/// - Decides once, at push time, whether an operator is prefix or infix.
/// - Applies unary and binary operators, skipping those that lack operands.
/// - Reports division by zero.
pub mod evaluator;
/// The lexer module tokenizes expressions.
///
/// The lexer reads the raw text and produces numbers, parentheses and
/// operators, always preferring the two-character spelling of an operator
/// over the one-character one.
///
/// # Responsibilities
/// - Skips whitespace and reads decimal literals.
/// - Recognizes the seventeen operator spellings.
/// - Reports characters outside the language with their offset.
pub mod lexer;
/// The validator module rejects malformed expressions before evaluation.
///
/// The validator makes one full pass over the expression, independent of the
/// evaluator, and fails on the first syntax defect with its offset.
///
/// # Responsibilities
/// - Tracks whether the last token was an operand or an operator.
/// - Tracks parenthesis depth.
/// - Produces precise, deterministic diagnostics.
pub mod validator;
