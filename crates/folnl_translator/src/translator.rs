//! The translation facade.

use folnl_foundation::{Error, InputKind, Result};
use folnl_logic::Converter;
use folnl_parser::Parser;
use folnl_vocabulary::Vocabulary;
use tracing::{debug, instrument};

use crate::direction::Direction;

/// Translates in either direction over one vocabulary.
#[derive(Clone, Copy, Debug)]
pub struct Translator<'v> {
    vocabulary: &'v Vocabulary,
}

impl Translator<'static> {
    /// A translator over the standard English vocabulary.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Vocabulary::standard())
    }
}

impl Default for Translator<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'v> Translator<'v> {
    /// Creates a translator over `vocabulary`.
    #[must_use]
    pub const fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// The vocabulary in use.
    #[must_use]
    pub const fn vocabulary(&self) -> &'v Vocabulary {
        self.vocabulary
    }

    /// Parses an English sentence into a formula.
    ///
    /// # Errors
    /// Returns an empty-input error for blank text, or a translation error
    /// carrying the parser's message.
    #[instrument(level = "debug", skip(self))]
    pub fn nl_to_fol(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Err(Error::empty_input(InputKind::NaturalLanguage));
        }
        let formula = Parser::from_text(text, self.vocabulary).parse()?;
        debug!(%formula, "translated sentence");
        Ok(formula)
    }

    /// Renders a formula as an English sentence.
    ///
    /// # Errors
    /// Returns an empty-input error for a blank formula, or a translation
    /// error carrying the converter's message.
    #[instrument(level = "debug", skip(self))]
    pub fn fol_to_nl(&self, formula: &str) -> Result<String> {
        if formula.trim().is_empty() {
            return Err(Error::empty_input(InputKind::Formula));
        }
        let sentence = Converter::new(formula, self.vocabulary).convert()?;
        debug!(%sentence, "translated formula");
        Ok(sentence)
    }

    /// Translates `text` in the given direction.
    ///
    /// # Errors
    /// See [`Self::nl_to_fol`] and [`Self::fol_to_nl`].
    pub fn translate(&self, direction: Direction, text: &str) -> Result<String> {
        match direction {
            Direction::NlToFol => self.nl_to_fol(text),
            Direction::FolToNl => self.fol_to_nl(text),
        }
    }
}

/// Parses an English sentence with the standard vocabulary.
///
/// # Errors
/// See [`Translator::nl_to_fol`].
pub fn translate_nl_to_fol(text: &str) -> Result<String> {
    Translator::standard().nl_to_fol(text)
}

/// Renders a formula with the standard vocabulary.
///
/// # Errors
/// See [`Translator::fol_to_nl`].
pub fn translate_fol_to_nl(formula: &str) -> Result<String> {
    Translator::standard().fol_to_nl(formula)
}
