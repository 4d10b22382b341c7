use logos::Logos;

use crate::{
    error::{SyntaxError, SyntaxResult},
    operator::Symbol,
};

/// Represents a lexical token in an expression.
///
/// Matching is longest-first, so `<=` is never read as `<` followed by `=`
/// and `+++` reads as `++` then `+`.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\n\r\x0B\x0C]+")]
pub enum Token {
    /// Unsigned decimal literal, such as `42`.
    #[regex(r"[0-9]+", parse_number)]
    Number(i64),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Any operator spelling.
    #[token("+", |_| Symbol::Plus)]
    #[token("-", |_| Symbol::Minus)]
    #[token("*", |_| Symbol::Star)]
    #[token("/", |_| Symbol::Slash)]
    #[token("%", |_| Symbol::Percent)]
    #[token("^", |_| Symbol::Caret)]
    #[token(">", |_| Symbol::Greater)]
    #[token(">=", |_| Symbol::GreaterEqual)]
    #[token("<", |_| Symbol::Less)]
    #[token("<=", |_| Symbol::LessEqual)]
    #[token("==", |_| Symbol::EqualEqual)]
    #[token("!=", |_| Symbol::BangEqual)]
    #[token("&&", |_| Symbol::AndAnd)]
    #[token("||", |_| Symbol::PipePipe)]
    #[token("!", |_| Symbol::Bang)]
    #[token("++", |_| Symbol::PlusPlus)]
    #[token("--", |_| Symbol::MinusMinus)]
    Operator(Symbol),
}

/// Accumulates a run of decimal digits as `value * 10 + digit`.
///
/// Overflow wraps silently; callers should not rely on the value of literals
/// that do not fit in an `i64`.
fn parse_number(lex: &logos::Lexer<Token>) -> i64 {
    lex.slice()
       .bytes()
       .fold(0_i64, |value, digit| value.wrapping_mul(10).wrapping_add(i64::from(digit - b'0')))
}

/// A token together with the offsets it was read from.
///
/// Every character the lexer accepts is ASCII, and scanning stops being
/// meaningful at the first rejected character, so byte offsets double as
/// character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spanned {
    /// The token.
    pub token: Token,
    /// Offset of the first character of the token.
    pub start: usize,
    /// Offset one past the last character of the token.
    pub end:   usize,
}

/// Produces tokens from an expression, advancing a cursor as it goes.
///
/// Each call to [`Iterator::next`] skips whitespace and reads the next
/// number, parenthesis or operator. An unrecognized character yields
/// [`SyntaxError::InvalidCharacter`] and the cursor moves past it, so the
/// caller may choose to keep going.
///
/// # Example
/// ```
/// use infixcalc::{interpreter::lexer::{Token, Tokenizer}, operator::Symbol};
///
/// let tokens: Vec<_> = Tokenizer::new("1 <= 20").map(|t| t.unwrap().token).collect();
/// assert_eq!(tokens,
///            [Token::Number(1), Token::Operator(Symbol::LessEqual), Token::Number(20)]);
/// ```
pub struct Tokenizer<'src> {
    lexer: logos::Lexer<'src, Token>,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer: Token::lexer(source) }
    }

    /// Offset of the first character not yet consumed.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.lexer.span().end
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = SyntaxResult<Spanned>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.lexer.next()?;
        let span = self.lexer.span();

        Some(match token {
                 Ok(token) => Ok(Spanned { token,
                                           start: span.start,
                                           end: span.end }),
                 Err(()) => {
                     let character = self.lexer
                                         .source()
                                         .get(span.start..)
                                         .and_then(|rest| rest.chars().next())
                                         .unwrap_or(char::REPLACEMENT_CHARACTER);
                     Err(SyntaxError::InvalidCharacter { character,
                                                         offset: span.start })
                 },
             })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        Tokenizer::new(source).map(|t| t.unwrap().token).collect()
    }

    #[test]
    fn two_character_operators_win() {
        assert_eq!(tokens("<=>=!=&&||==++--"),
                   [Token::Operator(Symbol::LessEqual),
                    Token::Operator(Symbol::GreaterEqual),
                    Token::Operator(Symbol::BangEqual),
                    Token::Operator(Symbol::AndAnd),
                    Token::Operator(Symbol::PipePipe),
                    Token::Operator(Symbol::EqualEqual),
                    Token::Operator(Symbol::PlusPlus),
                    Token::Operator(Symbol::MinusMinus)]);
    }

    #[test]
    fn triple_plus_is_increment_then_plus() {
        assert_eq!(tokens("+++2"),
                   [Token::Operator(Symbol::PlusPlus),
                    Token::Operator(Symbol::Plus),
                    Token::Number(2)]);
    }

    #[test]
    fn separated_pair_is_not_merged() {
        assert_eq!(tokens("< -"),
                   [Token::Operator(Symbol::Less), Token::Operator(Symbol::Minus)]);

        let mut tokenizer = Tokenizer::new("< =");
        assert!(tokenizer.next().unwrap().is_ok());
        assert_eq!(tokenizer.next().unwrap(),
                   Err(SyntaxError::InvalidCharacter { character: '=',
                                                       offset:    2, }));
    }

    #[test]
    fn numbers_and_spans() {
        let spanned: Vec<_> = Tokenizer::new(" 12\t( 345)").map(Result::unwrap).collect();
        assert_eq!(spanned[0],
                   Spanned { token: Token::Number(12),
                             start: 1,
                             end:   3, });
        assert_eq!(spanned[2],
                   Spanned { token: Token::Number(345),
                             start: 6,
                             end:   9, });
        assert_eq!(spanned[3].token, Token::RParen);
    }

    #[test]
    fn cursor_advances_past_each_token() {
        let mut tokenizer = Tokenizer::new("10 + 2");
        assert_eq!(tokenizer.cursor(), 0);
        tokenizer.next();
        assert_eq!(tokenizer.cursor(), 2);
        tokenizer.next();
        assert_eq!(tokenizer.cursor(), 4);
    }

    #[test]
    fn oversized_literal_does_not_panic() {
        assert_eq!(tokens("99999999999999999999").len(), 1);
    }

    #[test]
    fn lone_ampersand_is_invalid() {
        let first = Tokenizer::new("1 & 2").nth(1).unwrap();
        assert_eq!(first,
                   Err(SyntaxError::InvalidCharacter { character: '&',
                                                       offset:    2, }));
    }
}
