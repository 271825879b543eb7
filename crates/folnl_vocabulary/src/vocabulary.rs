//! Vocabulary tables for both translation directions.
//!
//! A [`Vocabulary`] is assembled through a [`VocabularyBuilder`] and is
//! immutable afterwards. Lookups are keyed by exact lowercase surface text.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::lexeme::{Connective, Lexeme, Quantifier};
use crate::stdlib;

static STANDARD: LazyLock<Vocabulary> = LazyLock::new(|| {
    let mut builder = Vocabulary::builder();
    for &(phrase, quantifier) in stdlib::QUANTIFIERS {
        builder = builder.quantifier(phrase, quantifier);
    }
    for &(phrase, connective) in stdlib::CONNECTIVES {
        builder = builder.connective(phrase, connective);
    }
    for &(phrase, name) in stdlib::PREDICATES {
        builder = builder.predicate(phrase, name);
    }
    for &(word, name) in stdlib::CONSTANTS {
        builder = builder.constant(word, name);
    }
    for &word in stdlib::AUXILIARIES {
        builder = builder.auxiliary(word);
    }
    for &(name, phrase) in stdlib::PREDICATE_PHRASES {
        builder = builder.phrase(name, phrase);
    }
    builder.build()
});

/// A multi-word vocabulary entry, matched by the tokenizer before single
/// words are considered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhraseEntry {
    /// Lowercase surface text, containing at least one space.
    pub phrase: String,
    /// Meaning of the phrase.
    pub lexeme: Lexeme,
}

/// Immutable lookup tables.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    /// Quantifier surface text -> quantifier
    quantifiers: HashMap<String, Quantifier>,
    /// Connective surface text -> connective
    connectives: HashMap<String, Connective>,
    /// Predicate surface text -> canonical identifier
    predicates: HashMap<String, String>,
    /// Proper name -> canonical constant
    constants: HashMap<String, String>,
    /// Stoplist
    auxiliaries: HashSet<String>,
    /// Canonical predicate -> English phrase
    phrases: HashMap<String, String>,
    /// Multi-word entries, longest first
    multiword: Vec<PhraseEntry>,
}

impl Vocabulary {
    /// Returns the shared standard English vocabulary.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Starts building a custom vocabulary.
    #[must_use]
    pub fn builder() -> VocabularyBuilder {
        VocabularyBuilder::default()
    }

    /// Multi-word entries sorted by descending phrase length.
    ///
    /// Entries of equal length keep registration order: quantifiers, then
    /// connectives, then predicates.
    #[must_use]
    pub fn multiword_entries(&self) -> &[PhraseEntry] {
        &self.multiword
    }

    /// Looks up a quantifier by surface text.
    #[must_use]
    pub fn lookup_quantifier(&self, text: &str) -> Option<Quantifier> {
        self.quantifiers.get(text).copied()
    }

    /// Looks up a connective by surface text.
    #[must_use]
    pub fn lookup_connective(&self, text: &str) -> Option<Connective> {
        self.connectives.get(text).copied()
    }

    /// Looks up a predicate identifier by surface text.
    #[must_use]
    pub fn lookup_predicate(&self, text: &str) -> Option<&str> {
        self.predicates.get(text).map(String::as_str)
    }

    /// Looks up a constant identifier by proper name.
    #[must_use]
    pub fn lookup_constant(&self, text: &str) -> Option<&str> {
        self.constants.get(text).map(String::as_str)
    }

    /// Checks if a word is on the stoplist.
    #[must_use]
    pub fn is_auxiliary(&self, word: &str) -> bool {
        self.auxiliaries.contains(word)
    }

    /// Returns the English phrase for a canonical predicate identifier.
    #[must_use]
    pub fn phrase_for(&self, predicate: &str) -> Option<&str> {
        self.phrases.get(predicate).map(String::as_str)
    }

    /// Classifies a single lowercase word.
    ///
    /// Precedence: quantifier, connective, predicate, constant, stoplist
    /// (copulas kept, the rest dropped), variable letter, plural of a known
    /// predicate, and finally an open-vocabulary predicate.
    #[must_use]
    pub fn classify(&self, word: &str) -> Lexeme {
        if let Some(quantifier) = self.lookup_quantifier(word) {
            return Lexeme::Quantifier(quantifier);
        }
        if let Some(connective) = self.lookup_connective(word) {
            return Lexeme::Connective(connective);
        }
        if let Some(name) = self.lookup_predicate(word) {
            return Lexeme::Predicate(name.to_string());
        }
        if let Some(name) = self.lookup_constant(word) {
            return Lexeme::Constant(name.to_string());
        }
        if self.is_auxiliary(word) {
            if stdlib::COPULAS.contains(&word) {
                return Lexeme::Copula;
            }
            return Lexeme::Auxiliary;
        }
        if let Some(variable) = single_variable(word) {
            return Lexeme::Variable(variable);
        }
        if let Some(name) = self.singular_predicate(word) {
            return Lexeme::Predicate(name.to_string());
        }
        Lexeme::OpenPredicate(word.to_string())
    }

    /// Resolves a regular plural ("birds") to a known single-word predicate.
    fn singular_predicate(&self, word: &str) -> Option<&str> {
        let stem = word.strip_suffix('s')?;
        if stem.is_empty() || stem.contains(' ') {
            return None;
        }
        self.lookup_predicate(stem)
    }
}

fn single_variable(word: &str) -> Option<char> {
    let mut chars = word.chars();
    let first = chars.next()?;
    if chars.next().is_none() && stdlib::VARIABLES.contains(&first) {
        Some(first)
    } else {
        None
    }
}

/// Builder for [`Vocabulary`].
///
/// Registration order matters only for multi-word phrases of equal length.
#[derive(Clone, Debug, Default)]
pub struct VocabularyBuilder {
    vocabulary: Vocabulary,
    pending: Vec<PhraseEntry>,
}

impl VocabularyBuilder {
    /// Registers a quantifier word or phrase.
    #[must_use]
    pub fn quantifier(mut self, text: &str, quantifier: Quantifier) -> Self {
        let text = text.to_lowercase();
        self.note_phrase(&text, Lexeme::Quantifier(quantifier));
        self.vocabulary.quantifiers.insert(text, quantifier);
        self
    }

    /// Registers a connective word or phrase.
    #[must_use]
    pub fn connective(mut self, text: &str, connective: Connective) -> Self {
        let text = text.to_lowercase();
        self.note_phrase(&text, Lexeme::Connective(connective));
        self.vocabulary.connectives.insert(text, connective);
        self
    }

    /// Registers a predicate word or phrase with its canonical identifier.
    #[must_use]
    pub fn predicate(mut self, text: &str, name: &str) -> Self {
        let text = text.to_lowercase();
        self.note_phrase(&text, Lexeme::Predicate(name.to_string()));
        self.vocabulary.predicates.insert(text, name.to_string());
        self
    }

    /// Registers a proper name with its canonical constant.
    #[must_use]
    pub fn constant(mut self, word: &str, name: &str) -> Self {
        self.vocabulary
            .constants
            .insert(word.to_lowercase(), name.to_string());
        self
    }

    /// Registers a stoplist word.
    #[must_use]
    pub fn auxiliary(mut self, word: &str) -> Self {
        self.vocabulary.auxiliaries.insert(word.to_lowercase());
        self
    }

    /// Registers the English phrase for a canonical predicate.
    #[must_use]
    pub fn phrase(mut self, predicate: &str, phrase: &str) -> Self {
        self.vocabulary
            .phrases
            .insert(predicate.to_string(), phrase.to_string());
        self
    }

    /// Finishes the vocabulary, ordering multi-word phrases longest first.
    #[must_use]
    pub fn build(self) -> Vocabulary {
        let mut vocabulary = self.vocabulary;
        let mut multiword = self.pending;
        // Stable: equal lengths keep registration order.
        multiword.sort_by(|a, b| b.phrase.chars().count().cmp(&a.phrase.chars().count()));
        vocabulary.multiword = multiword;
        vocabulary
    }

    fn note_phrase(&mut self, text: &str, lexeme: Lexeme) {
        if !text.contains(' ') {
            return;
        }
        if let Some(existing) = self.pending.iter_mut().find(|e| e.phrase == text) {
            existing.lexeme = lexeme;
        } else {
            self.pending.push(PhraseEntry {
                phrase: text.to_string(),
                lexeme,
            });
        }
    }
}
