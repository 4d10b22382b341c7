use log::debug;

use crate::{
    error::{SyntaxError, SyntaxResult},
    interpreter::lexer::{Spanned, Token, Tokenizer},
};

/// What the previous significant token was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Last {
    /// Nothing yet, or an opening parenthesis.
    Nothing,
    /// A number or a closing parenthesis.
    Operand,
    /// Any operator.
    Operator,
}

/// Checks an expression for syntax defects without evaluating it.
///
/// The scan runs once, left to right, and stops at the first defect found:
/// - the empty string,
/// - a leading `)` or a leading operator that cannot be a prefix,
/// - a `)` that closes no group,
/// - two numbers in a row,
/// - an operator directly after another one, unless it can be a prefix,
/// - a character outside the language,
/// - groups left open at the end of input.
///
/// Leading defects are reported at offset 0 even when whitespace precedes
/// them. An expression made only of whitespace is accepted.
///
/// # Errors
/// Returns the [`SyntaxError`] describing the first defect.
///
/// # Example
/// ```
/// use infixcalc::{error::SyntaxError, interpreter::validator::validate};
///
/// assert!(validate("1 + -(2 * 3)").is_ok());
/// assert_eq!(validate("1 2"), Err(SyntaxError::DuplicateOperand { offset: 2 }));
/// ```
pub fn validate(source: &str) -> SyntaxResult<()> {
    if source.is_empty() {
        return Err(SyntaxError::EmptyInput);
    }

    let mut last = Last::Nothing;
    let mut depth = 0_usize;
    let mut leading = true;

    for spanned in Tokenizer::new(source) {
        let Spanned { token, start, .. } = spanned?;

        match token {
            Token::LParen => {
                depth += 1;
                last = Last::Nothing;
            },
            Token::RParen => {
                if leading {
                    return Err(SyntaxError::LeadingCloseParen { offset: 0 });
                }
                depth = depth.checked_sub(1)
                             .ok_or(SyntaxError::UnmatchedParenthesis { offset: Some(start) })?;
                last = Last::Operand;
            },
            Token::Number(_) => {
                if last == Last::Operand {
                    return Err(SyntaxError::DuplicateOperand { offset: start });
                }
                last = Last::Operand;
            },
            Token::Operator(operator) => {
                if !operator.is_unary_capable() {
                    if leading {
                        return Err(SyntaxError::LeadingBinaryOperator { operator,
                                                                        offset: 0 });
                    }
                    if last == Last::Operator {
                        return Err(SyntaxError::DuplicateOperator { operator,
                                                                    offset: start });
                    }
                }
                last = Last::Operator;
            },
        }

        leading = false;
    }

    if depth != 0 {
        return Err(SyntaxError::UnmatchedParenthesis { offset: None });
    }

    debug!("validated {source:?}");
    Ok(())
}
