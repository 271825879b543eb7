//! Token types for natural-language input.
//!
//! Tokens are the output of the tokenizer and input to the parser.

use std::fmt;

use folnl_vocabulary::{Connective, Quantifier};

/// A classified lexical unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// The category of this token.
    pub kind: TokenKind,
    /// Surface text for keywords and punctuation, canonical identifier for
    /// predicates and constants.
    pub value: String,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Creates the end-of-input token.
    #[must_use]
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }

    /// Returns true if this is the end-of-input token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}({})", self.kind, self.value)
        }
    }
}

/// Token categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    // Quantifiers
    /// "every"
    Every,
    /// "all"
    All,
    /// "some"
    Some,
    /// "exists"
    Exists,
    /// "no"
    No,

    // Connectives
    /// "and"
    And,
    /// "or"
    Or,
    /// "not"
    Not,
    /// "if"
    If,
    /// "then" / "implies"
    Then,
    /// "iff" / "if and only if"
    Iff,

    /// "is" / "are"
    Is,

    // Lexical
    /// Predicate word, known or open-vocabulary
    Noun,
    /// Variable letter
    Variable,
    /// Proper name
    Constant,

    // Structural
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// `.`
    Dot,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Returns the quantifier this kind stands for, if any.
    #[must_use]
    pub const fn quantifier(self) -> Option<Quantifier> {
        match self {
            Self::Every => Some(Quantifier::Every),
            Self::All => Some(Quantifier::All),
            Self::Some => Some(Quantifier::Some),
            Self::Exists => Some(Quantifier::Exists),
            Self::No => Some(Quantifier::No),
            _ => None,
        }
    }

    /// Returns the upper-case name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Every => "EVERY",
            Self::All => "ALL",
            Self::Some => "SOME",
            Self::Exists => "EXISTS",
            Self::No => "NO",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::If => "IF",
            Self::Then => "THEN",
            Self::Iff => "IFF",
            Self::Is => "IS",
            Self::Noun => "NOUN",
            Self::Variable => "VARIABLE",
            Self::Constant => "CONSTANT",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Eof => "EOF",
        }
    }

    /// Maps a structural character to its token kind.
    #[must_use]
    pub const fn structural(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::LParen),
            ')' => Some(Self::RParen),
            ',' => Some(Self::Comma),
            '.' => Some(Self::Dot),
            _ => None,
        }
    }
}

impl From<Quantifier> for TokenKind {
    fn from(quantifier: Quantifier) -> Self {
        match quantifier {
            Quantifier::Every => Self::Every,
            Quantifier::All => Self::All,
            Quantifier::Some => Self::Some,
            Quantifier::Exists => Self::Exists,
            Quantifier::No => Self::No,
        }
    }
}

impl From<Connective> for TokenKind {
    fn from(connective: Connective) -> Self {
        match connective {
            Connective::And => Self::And,
            Connective::Or => Self::Or,
            Connective::Not => Self::Not,
            Connective::If => Self::If,
            Connective::Then => Self::Then,
            Connective::Iff => Self::Iff,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
