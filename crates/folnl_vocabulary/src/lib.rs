//! Closed vocabulary tables shared by the folnl parser and converter.
//!
//! The tables map surface words and phrases to canonical quantifiers,
//! connectives, predicate identifiers and constant identifiers. They are
//! built once and never mutated afterwards.
//!
//! # Modules
//!
//! - [`vocabulary`] - The immutable [`Vocabulary`] and its builder
//! - [`lexeme`] - Classification of a single surface word or phrase
//! - [`stdlib`] - The standard English tables

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lexeme;
pub mod stdlib;
pub mod vocabulary;

pub use lexeme::{Connective, Lexeme, Quantifier, capitalize};
pub use vocabulary::{PhraseEntry, Vocabulary, VocabularyBuilder};
