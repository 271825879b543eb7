//! Error types for the folnl translator.
//!
//! Uses `thiserror` for ergonomic error definition. The parser and converter
//! each have their own precise error enum; the translator facade folds both
//! into [`Error`] so callers only ever handle one type.

use std::fmt;

use thiserror::Error;

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for translation operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Where in the input it went wrong, when known.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Wraps `kind` without location.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Attaches input location.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an empty-input error for the given side of the translation.
    #[must_use]
    pub fn empty_input(input: InputKind) -> Self {
        Self::new(ErrorKind::EmptyInput(input))
    }

    /// Creates a translation error carrying a parser or converter message.
    #[must_use]
    pub fn translation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Translation(message.into()))
    }

    /// Creates a usage error for a misused command or option.
    #[must_use]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Usage(message.into()))
    }

    /// Returns true if this error was raised for blank input.
    #[must_use]
    pub const fn is_empty_input(&self) -> bool {
        matches!(self.kind, ErrorKind::EmptyInput(_))
    }

    /// Returns the human-readable message without any context decoration.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl From<SyntaxError> for Error {
    fn from(err: SyntaxError) -> Self {
        Self::translation(err.to_string())
    }
}

impl From<ConversionError> for Error {
    fn from(err: ConversionError) -> Self {
        Self::translation(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err.to_string()))
    }
}

/// Failure categories, one per stage of translation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Input was empty or whitespace only.
    #[error("{0}")]
    EmptyInput(InputKind),

    /// The parser or converter rejected the input.
    #[error("{0}")]
    Translation(String),

    /// Reading input or writing a transcript failed.
    #[error("io error: {0}")]
    Io(String),

    /// Encoding or decoding a saved session failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A command or option was used incorrectly.
    #[error("{0}")]
    Usage(String),

    /// Broken invariant inside the translator.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Which side of the translation a piece of input belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputKind {
    /// A constrained English sentence.
    NaturalLanguage,
    /// A first-order logic formula.
    Formula,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NaturalLanguage => write!(f, "natural language statement is empty"),
            Self::Formula => write!(f, "FOL formula is empty"),
        }
    }
}

/// Failures of the natural-language to FOL parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The current token does not fit the grammar rule being parsed.
    #[error("{}", describe_unexpected(.expected.as_deref(), .found))]
    UnexpectedToken {
        /// The token kind the rule required, if a single one was required.
        expected: Option<String>,
        /// The token kind that was found.
        found: String,
    },

    /// A quantifier was not followed by a predicate.
    #[error("expected predicate after quantifier")]
    MissingPredicate,

    /// An explicit argument list ran into the end of input before `)`.
    #[error("unterminated argument list")]
    UnterminatedArgumentList,

    /// A complete statement was parsed but tokens remain.
    #[error("unexpected tokens at end of input")]
    TrailingInput {
        /// The first leftover token kind.
        found: String,
    },
}

fn describe_unexpected(expected: Option<&str>, found: &str) -> String {
    match expected {
        Some(expected) => format!("expected {expected} but found {found}"),
        None => format!("unexpected token: {found}"),
    }
}

/// Failures of the FOL to natural-language converter.
///
/// Positions are character offsets into the trimmed formula.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The formula was empty after trimming.
    #[error("empty formula")]
    EmptyFormula,

    /// A required closing character was missing.
    #[error("expected '{expected}'")]
    UnmatchedParenthesis {
        /// The character that was required.
        expected: char,
        /// Where it was required.
        position: usize,
    },

    /// A predicate argument list was never closed.
    #[error("arguments list not terminated")]
    UnterminatedArgumentList,

    /// The formula ended where a formula was required.
    #[error("unexpected end of formula")]
    UnexpectedEndOfFormula,

    /// The formula ended where an operand of a connective was required.
    #[error("unexpected end of subformula")]
    UnexpectedEndOfSubformula,

    /// A complete formula was read but characters remain.
    #[error("unexpected trailing characters")]
    TrailingCharacters {
        /// Offset of the first leftover character.
        position: usize,
    },

    /// A predicate name was required.
    #[error("expected identifier")]
    ExpectedIdentifier {
        /// Where the identifier was required.
        position: usize,
    },

    /// A quantifier was not followed by a lowercase variable letter.
    #[error("expected variable")]
    ExpectedVariable {
        /// Where the variable was required.
        position: usize,
    },

    /// Parentheses or quantifiers nest deeper than the converter allows.
    #[error("formula nested too deeply (limit {limit})")]
    NestingTooDeep {
        /// The maximum nesting depth.
        limit: usize,
    },
}

/// Location of a failure within translated text.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file the input came from.
    pub source: Option<String>,
    /// The input text that failed.
    pub input: Option<String>,
}

impl ErrorContext {
    /// An empty location.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Names the input the failure came from.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Records the failing input.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
        }
        if let Some(input) = &self.input {
            if self.source.is_some() {
                write!(f, " ")?;
            }
            write!(f, "while translating {input:?}")?;
        }
        Ok(())
    }
}
