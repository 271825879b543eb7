//! Translation direction.

use std::fmt;
use std::str::FromStr;

use folnl_foundation::InputKind;
use thiserror::Error;

/// Which way text is translated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// English sentence to formula.
    NlToFol,
    /// Formula to English sentence.
    FolToNl,
}

impl Direction {
    /// Both directions, sentence-first.
    pub const ALL: [Self; 2] = [Self::NlToFol, Self::FolToNl];

    /// Command name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NlToFol => "nl2fol",
            Self::FolToNl => "fol2nl",
        }
    }

    /// Short label with an arrow, e.g. "NL → FOL".
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NlToFol => "NL → FOL",
            Self::FolToNl => "FOL → NL",
        }
    }

    /// The kind of text this direction reads.
    #[must_use]
    pub const fn input_kind(self) -> InputKind {
        match self {
            Self::NlToFol => InputKind::NaturalLanguage,
            Self::FolToNl => InputKind::Formula,
        }
    }

    /// The reverse direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::NlToFol => Self::FolToNl,
            Self::FolToNl => Self::NlToFol,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a direction name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction: {0} (expected nl2fol or fol2nl)")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    /// Accepts `nl2fol`/`fol2nl` and the hyphenated `nl-to-fol`/`fol-to-nl`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nl2fol" | "nl-to-fol" => Ok(Self::NlToFol),
            "fol2nl" | "fol-to-nl" => Ok(Self::FolToNl),
            _ => Err(UnknownDirection(s.to_string())),
        }
    }
}
