//! Classification of surface words.

use std::fmt;

/// A quantifier word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quantifier {
    /// "every", "for every"
    Every,
    /// "all", "for all"
    All,
    /// "some"
    Some,
    /// "exists", "there exists"
    Exists,
    /// "no"
    No,
}

impl Quantifier {
    /// Returns true for the universal quantifiers.
    #[must_use]
    pub const fn is_universal(self) -> bool {
        matches!(self, Self::Every | Self::All)
    }

    /// Returns true for the existential quantifiers.
    #[must_use]
    pub const fn is_existential(self) -> bool {
        matches!(self, Self::Some | Self::Exists)
    }

    /// Returns the upper-case token name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Every => "EVERY",
            Self::All => "ALL",
            Self::Some => "SOME",
            Self::Exists => "EXISTS",
            Self::No => "NO",
        }
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A sentential connective word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connective {
    /// "and"
    And,
    /// "or"
    Or,
    /// "not"
    Not,
    /// "if"
    If,
    /// "then", "implies"
    Then,
    /// "iff", "if and only if"
    Iff,
}

impl Connective {
    /// Returns the upper-case token name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::If => "IF",
            Self::Then => "THEN",
            Self::Iff => "IFF",
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a single surface word or phrase means to the tokenizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lexeme {
    /// A quantifier word or phrase.
    Quantifier(Quantifier),
    /// A connective word or phrase.
    Connective(Connective),
    /// "is" / "are".
    Copula,
    /// A known predicate, carrying its canonical identifier (e.g. `CanFly`).
    Predicate(String),
    /// An unrecognized word treated as an ad hoc predicate, carrying the raw
    /// surface text.
    OpenPredicate(String),
    /// A known proper name, carrying its canonical identifier.
    Constant(String),
    /// One of the variable letters `x`, `y`, `z`.
    Variable(char),
    /// A stoplist word that carries no meaning (a, the, who, ...).
    Auxiliary,
}

impl Lexeme {
    /// Returns true if the tokenizer should emit nothing for this lexeme.
    #[must_use]
    pub const fn is_dropped(&self) -> bool {
        matches!(self, Self::Auxiliary)
    }

    /// Returns the predicate identifier for known and open predicates.
    ///
    /// Open predicates are capitalized on the first character.
    #[must_use]
    pub fn predicate_name(&self) -> Option<String> {
        match self {
            Self::Predicate(name) => Some(name.clone()),
            Self::OpenPredicate(raw) => Some(capitalize(raw)),
            _ => None,
        }
    }
}

/// Upper-cases the first character of `word`, leaving the rest untouched.
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
