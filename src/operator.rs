/// Precedence shared by every operator applied as a prefix, and by `!`, `++`
/// and `--` in any position.
pub const UNARY_PRECEDENCE: u8 = 8;

/// One of the operator spellings the language recognizes.
///
/// A symbol says nothing about how many operands it takes: `+` and `-` may
/// be prefix or infix depending on where they appear. That decision is
/// recorded separately in [`OperatorToken`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `^`
    Caret,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `==`
    EqualEqual,
    /// `!=`
    BangEqual,
    /// `&&`
    AndAnd,
    /// `||`
    PipePipe,
    /// `!`
    Bang,
    /// `++`
    PlusPlus,
    /// `--`
    MinusMinus,
}

impl Symbol {
    /// Every symbol, from the tightest binding to the loosest.
    pub const ALL: [Self; 17] = [Self::Bang,
                                 Self::PlusPlus,
                                 Self::MinusMinus,
                                 Self::Caret,
                                 Self::Star,
                                 Self::Slash,
                                 Self::Percent,
                                 Self::Plus,
                                 Self::Minus,
                                 Self::Greater,
                                 Self::GreaterEqual,
                                 Self::Less,
                                 Self::LessEqual,
                                 Self::EqualEqual,
                                 Self::BangEqual,
                                 Self::AndAnd,
                                 Self::PipePipe];

    /// Returns the rank of the symbol when it sits between two operands.
    /// Higher binds tighter.
    ///
    /// # Example
    /// ```
    /// use infixcalc::operator::Symbol;
    ///
    /// assert!(Symbol::Star.binary_precedence() > Symbol::Plus.binary_precedence());
    /// assert_eq!(Symbol::PipePipe.binary_precedence(), 1);
    /// ```
    #[must_use]
    pub const fn binary_precedence(self) -> u8 {
        match self {
            Self::Bang | Self::PlusPlus | Self::MinusMinus => UNARY_PRECEDENCE,
            Self::Caret => 7,
            Self::Star | Self::Slash | Self::Percent => 6,
            Self::Plus | Self::Minus => 5,
            Self::Greater | Self::GreaterEqual | Self::Less | Self::LessEqual => 4,
            Self::EqualEqual | Self::BangEqual => 3,
            Self::AndAnd => 2,
            Self::PipePipe => 1,
        }
    }

    /// Whether the symbol may be applied to a single operand when it appears
    /// where an operand is expected.
    #[must_use]
    pub const fn is_unary_capable(self) -> bool {
        matches!(self,
                 Self::Plus | Self::Minus | Self::Bang | Self::PlusPlus | Self::MinusMinus)
    }

    /// Whether the symbol has a meaning between two operands. `!`, `++` and
    /// `--` are prefix-only.
    #[must_use]
    pub const fn is_binary_capable(self) -> bool {
        !matches!(self, Self::Bang | Self::PlusPlus | Self::MinusMinus)
    }

    /// Returns the source text of the symbol.
    #[must_use]
    pub const fn spelling(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Caret => "^",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::AndAnd => "&&",
            Self::PipePipe => "||",
            Self::Bang => "!",
            Self::PlusPlus => "++",
            Self::MinusMinus => "--",
        }
    }

    /// Short description used by the command-line help screen.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Bang => "logical not",
            Self::PlusPlus => "prefix increment",
            Self::MinusMinus => "prefix decrement",
            Self::Caret => "power",
            Self::Star => "multiplication",
            Self::Slash => "division",
            Self::Percent => "modulo",
            Self::Plus => "addition, or unary plus",
            Self::Minus => "subtraction, or negation",
            Self::Greater | Self::GreaterEqual | Self::Less | Self::LessEqual => "comparison",
            Self::EqualEqual | Self::BangEqual => "equality comparison",
            Self::AndAnd => "logical and",
            Self::PipePipe => "logical or",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.spelling())
    }
}

/// How an operator is applied.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    /// Prefix application to a single operand.
    Unary,
    /// Infix application to a left and a right operand.
    Binary,
}

/// An operator whose role has been decided by its position in the
/// expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct OperatorToken {
    /// The spelling found in the source.
    pub symbol: Symbol,
    /// Whether it takes one operand or two.
    pub role:   Role,
}

impl OperatorToken {
    /// Tags `symbol` as a prefix operator.
    #[must_use]
    pub const fn unary(symbol: Symbol) -> Self {
        Self { symbol,
               role: Role::Unary }
    }

    /// Tags `symbol` as an infix operator.
    #[must_use]
    pub const fn binary(symbol: Symbol) -> Self {
        Self { symbol,
               role: Role::Binary }
    }

    /// Returns the precedence used when deciding whether to reduce.
    ///
    /// Prefix operators always rank at [`UNARY_PRECEDENCE`], so `-` binds
    /// tighter as a sign than as a subtraction.
    ///
    /// # Example
    /// ```
    /// use infixcalc::operator::{OperatorToken, Symbol};
    ///
    /// assert_eq!(OperatorToken::unary(Symbol::Minus).precedence(), 8);
    /// assert_eq!(OperatorToken::binary(Symbol::Minus).precedence(), 5);
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self.role {
            Role::Unary => UNARY_PRECEDENCE,
            Role::Binary => self.symbol.binary_precedence(),
        }
    }
}

impl std::fmt::Display for OperatorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.role {
            Role::Unary => write!(f, "unary {}", self.symbol),
            Role::Binary => write!(f, "binary {}", self.symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unary_capable_symbols() {
        let capable: Vec<_> = Symbol::ALL.into_iter()
                                         .filter(|s| s.is_unary_capable())
                                         .map(Symbol::spelling)
                                         .collect();
        assert_eq!(capable, ["!", "++", "--", "+", "-"]);
    }

    #[test]
    fn table_is_ordered_by_precedence() {
        let ranks: Vec<_> = Symbol::ALL.iter().map(|s| s.binary_precedence()).collect();
        assert!(ranks.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(ranks.first(), Some(&8));
        assert_eq!(ranks.last(), Some(&1));
    }

    #[test]
    fn prefix_only_symbols_have_no_binary_meaning() {
        for symbol in Symbol::ALL {
            let prefix_only = matches!(symbol, Symbol::Bang | Symbol::PlusPlus | Symbol::MinusMinus);
            assert_eq!(symbol.is_binary_capable(), !prefix_only, "{symbol}");
        }
    }
}
