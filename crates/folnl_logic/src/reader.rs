//! Character cursor over a formula.
//!
//! Positions count Unicode scalar values, not bytes, so logic symbols
//! occupy one position each.

use folnl_foundation::ConversionError;

/// Quantifier and connective symbols.
pub mod symbols {
    /// Universal quantifier.
    pub const FORALL: char = '∀';
    /// Existential quantifier.
    pub const EXISTS: char = '∃';
    /// Negation.
    pub const NOT: char = '¬';
    /// Conjunction.
    pub const AND: char = '∧';
    /// Disjunction.
    pub const OR: char = '∨';
    /// Implication.
    pub const IMPLIES: char = '→';
    /// Biconditional.
    pub const IFF: char = '↔';

    /// Returns true for any logic symbol.
    #[must_use]
    pub const fn is_logic_symbol(c: char) -> bool {
        matches!(c, FORALL | EXISTS | NOT | AND | OR | IMPLIES | IFF)
    }
}

/// Cursor over the characters of a trimmed formula.
#[derive(Debug, Clone)]
pub struct FormulaReader {
    chars: Vec<char>,
    position: usize,
}

impl FormulaReader {
    /// Creates a reader over `formula` after trimming it.
    #[must_use]
    pub fn new(formula: &str) -> Self {
        Self {
            chars: formula.trim().chars().collect(),
            position: 0,
        }
    }

    /// Returns true if the trimmed formula has no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns true once every character has been consumed.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// Peeks at the current character.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    /// Returns true if the current character is `c`.
    #[must_use]
    pub fn at(&self, c: char) -> bool {
        self.peek() == Some(c)
    }

    /// Advances past one character.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += 1;
        Some(c)
    }

    /// Skips whitespace.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.position += 1;
        }
    }

    /// Consumes `expected` after optional whitespace.
    ///
    /// # Errors
    /// Returns [`ConversionError::UnmatchedParenthesis`] if it is absent.
    pub fn expect(&mut self, expected: char) -> Result<(), ConversionError> {
        self.skip_whitespace();
        if !self.at(expected) {
            return Err(ConversionError::UnmatchedParenthesis {
                expected,
                position: self.position,
            });
        }
        self.position += 1;
        Ok(())
    }

    /// Consumes a run of alphabetic characters.
    ///
    /// # Errors
    /// Returns [`ConversionError::ExpectedIdentifier`] if the run is empty.
    pub fn identifier(&mut self) -> Result<String, ConversionError> {
        let start = self.position;
        while self.peek().is_some_and(char::is_alphabetic) {
            self.position += 1;
        }
        if start == self.position {
            return Err(ConversionError::ExpectedIdentifier { position: start });
        }
        Ok(self.chars[start..self.position].iter().collect())
    }

    /// Consumes the single lowercase letter following a quantifier.
    ///
    /// # Errors
    /// Returns [`ConversionError::ExpectedVariable`] if there is none.
    pub fn variable(&mut self) -> Result<char, ConversionError> {
        match self.peek() {
            Some(c) if c.is_alphabetic() && c.is_lowercase() => {
                self.position += 1;
                Ok(c)
            }
            _ => Err(ConversionError::ExpectedVariable {
                position: self.position,
            }),
        }
    }

    /// Consumes a predicate argument list, assuming `(` was already consumed.
    ///
    /// Arguments are split on commas and trimmed; the closing `)` is consumed.
    ///
    /// # Errors
    /// Returns [`ConversionError::UnterminatedArgumentList`] if the formula
    /// ends before `)`.
    pub fn arguments(&mut self) -> Result<Vec<String>, ConversionError> {
        let mut args = Vec::new();
        let mut current = String::new();
        while let Some(c) = self.bump() {
            match c {
                ')' => {
                    if !current.is_empty() {
                        args.push(current.trim().to_string());
                    }
                    return Ok(args);
                }
                ',' => {
                    args.push(current.trim().to_string());
                    current.clear();
                    self.skip_whitespace();
                }
                _ => current.push(c),
            }
        }
        Err(ConversionError::UnterminatedArgumentList)
    }
}
