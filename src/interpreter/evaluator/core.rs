use log::trace;

use crate::{
    error::RuntimeError,
    interpreter::lexer::{Spanned, Token, Tokenizer},
    operator::{OperatorToken, Role, Symbol},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// An entry on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackEntry {
    /// An opening parenthesis. Reductions never cross it until the matching
    /// `)` removes it.
    Paren,
    /// A pending operator with its role already decided.
    Operator(OperatorToken),
}

/// Two-stack precedence climbing evaluator.
///
/// An engine evaluates one expression and is then consumed. It assumes the
/// expression already passed [`crate::interpreter::validator::validate`]:
/// characters outside the language are skipped and operators that find too
/// few operands are dropped instead of reported.
///
/// The stepping methods are public so the reduction rules can be driven and
/// observed directly.
///
/// # Example
/// ```
/// use infixcalc::interpreter::evaluator::core::Engine;
///
/// assert_eq!(Engine::new().run("2 + 2 * 2 * 3"), Ok(14));
/// ```
#[derive(Debug)]
pub struct Engine {
    operands:       Vec<i64>,
    operators:      Vec<StackEntry>,
    expect_operand: bool,
}

#[allow(clippy::new_without_default)]
impl Engine {
    /// Creates an engine with empty stacks, expecting an operand.
    #[must_use]
    pub const fn new() -> Self {
        Self { operands:       Vec::new(),
               operators:      Vec::new(),
               expect_operand: true, }
    }

    /// Evaluates `source` from left to right and returns the result.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] if a reduction divides by
    /// zero. The offset is the tokenizer's position when the reduction ran.
    pub fn run(mut self, source: &str) -> EvalResult<i64> {
        for spanned in Tokenizer::new(source) {
            match spanned {
                Ok(Spanned { token: Token::Number(value),
                             .. }) => self.push_operand(value),
                Ok(Spanned { token: Token::LParen,
                             .. }) => self.open_group(),
                Ok(Spanned { token: Token::RParen,
                             start,
                             .. }) => self.close_group(start)?,
                Ok(Spanned { token: Token::Operator(symbol),
                             end,
                             .. }) => self.push_operator(symbol, end)?,
                Err(e) => trace!("skipping unrecognized input: {e}"),
            }
        }

        self.finish(source.len())
    }

    /// Pushes a number and starts expecting an operator.
    pub fn push_operand(&mut self, value: i64) {
        self.operands.push(value);
        self.expect_operand = false;
    }

    /// Opens a group: pushes a parenthesis marker and expects an operand.
    pub fn open_group(&mut self) {
        self.operators.push(StackEntry::Paren);
        self.expect_operand = true;
    }

    /// Closes a group: applies pending operators down to the nearest
    /// parenthesis marker, then discards the marker.
    ///
    /// # Errors
    /// Propagates any error raised while applying the operators.
    pub fn close_group(&mut self, cursor: usize) -> EvalResult<()> {
        while let Some(entry) = self.operators.pop() {
            match entry {
                StackEntry::Paren => break,
                StackEntry::Operator(op) => self.apply(op, cursor)?,
            }
        }
        self.expect_operand = false;
        Ok(())
    }

    /// Handles an operator symbol read from the input.
    ///
    /// In operand position a unary-capable symbol is pushed as a prefix
    /// without reducing anything. Otherwise the symbol is infix: every
    /// operator above the nearest parenthesis marker with equal or higher
    /// precedence is applied first, then the new one is pushed.
    ///
    /// # Errors
    /// Propagates any error raised while applying the operators.
    pub fn push_operator(&mut self, symbol: Symbol, cursor: usize) -> EvalResult<()> {
        if self.expect_operand && symbol.is_unary_capable() {
            self.operators.push(StackEntry::Operator(OperatorToken::unary(symbol)));
            return Ok(());
        }

        let incoming = OperatorToken::binary(symbol);
        while let Some(&StackEntry::Operator(top)) = self.operators.last() {
            if top.precedence() < incoming.precedence() {
                break;
            }
            self.operators.pop();
            self.apply(top, cursor)?;
        }

        self.operators.push(StackEntry::Operator(incoming));
        self.expect_operand = true;
        Ok(())
    }

    /// Applies one operator to the operand stack.
    ///
    /// A prefix operator replaces the top operand; an infix operator replaces
    /// the top two, the later-pushed being the right operand. When there are
    /// not enough operands the operator is dropped and the stack is left as
    /// it was.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] at `cursor` for `/` or `%`
    /// with a zero right operand.
    ///
    /// # Example
    /// ```
    /// use infixcalc::{
    ///     interpreter::evaluator::core::Engine,
    ///     operator::{OperatorToken, Symbol},
    /// };
    ///
    /// let mut engine = Engine::new();
    /// engine.push_operand(4);
    /// engine.apply(OperatorToken::binary(Symbol::Star), 0).unwrap();
    /// assert_eq!(engine.operands(), [4]);
    /// ```
    pub fn apply(&mut self, op: OperatorToken, cursor: usize) -> EvalResult<()> {
        match op.role {
            Role::Unary => {
                let Some(value) = self.operands.pop() else {
                    trace!("{op} has no operand, skipped");
                    return Ok(());
                };
                let result = Self::eval_unary(op.symbol, value);
                trace!("{op} {value} = {result}");
                self.operands.push(result);
            },
            Role::Binary => {
                let &[.., left, right] = self.operands.as_slice() else {
                    trace!("{op} has fewer than two operands, skipped");
                    return Ok(());
                };
                let result = Self::eval_binary(op.symbol, left, right, cursor)?;
                trace!("{left} {} {right} = {result}", op.symbol);
                self.operands.truncate(self.operands.len() - 2);
                self.operands.push(result);
            },
        }
        Ok(())
    }

    /// Applies every remaining operator and returns the result.
    ///
    /// Leftover parenthesis markers are ignored. The result is the top of
    /// the operand stack, or `0` if the stack is empty.
    ///
    /// # Errors
    /// Propagates any error raised while applying the operators.
    pub fn finish(mut self, cursor: usize) -> EvalResult<i64> {
        while let Some(entry) = self.operators.pop() {
            if let StackEntry::Operator(op) = entry {
                self.apply(op, cursor)?;
            }
        }
        Ok(self.operands.last().copied().unwrap_or(0))
    }

    /// The operand stack, bottom first.
    #[must_use]
    pub fn operands(&self) -> &[i64] {
        &self.operands
    }

    /// The operator stack, bottom first.
    #[must_use]
    pub fn operators(&self) -> &[StackEntry] {
        &self.operators
    }

    /// Whether the next token is expected to start an operand.
    #[must_use]
    pub const fn expects_operand(&self) -> bool {
        self.expect_operand
    }
}
