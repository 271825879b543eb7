//! Session transcript for the REPL.
//!
//! Every translation attempt is recorded, successful or not, so a session
//! can be reviewed with `:history` or saved and restored later.

use serde::{Deserialize, Serialize};

use folnl_foundation::Result;
use folnl_translator::{Direction, Translator};

/// What a translation attempt produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The translated text.
    Translated(String),
    /// The error message.
    Failed(String),
}

impl Outcome {
    /// Returns true for a successful translation.
    #[must_use]
    pub const fn is_translated(&self) -> bool {
        matches!(self, Self::Translated(_))
    }

    /// The translated text or the error message.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Translated(text) | Self::Failed(text) => text,
        }
    }
}

/// One recorded translation attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Direction of the attempt.
    pub direction: Direction,
    /// The text as entered, after notation rewriting.
    pub input: String,
    /// What came out.
    pub outcome: Outcome,
}

/// An ordered record of translation attempts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    entries: Vec<Entry>,
}

impl Session {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Translates `text` and records the attempt.
    ///
    /// # Errors
    /// Returns the translation error after recording it.
    pub fn translate(
        &mut self,
        translator: &Translator<'_>,
        direction: Direction,
        text: &str,
    ) -> Result<String> {
        let result = translator.translate(direction, text);
        let outcome = match &result {
            Ok(output) => Outcome::Translated(output.clone()),
            Err(err) => Outcome::Failed(err.message()),
        };
        self.entries.push(Entry {
            direction,
            input: text.to_string(),
            outcome,
        });
        result
    }

    /// Recorded entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends the entries of another session.
    pub fn extend(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    /// Forgets every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
