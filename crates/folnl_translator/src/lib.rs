//! Bidirectional translation between constrained English and first-order logic.
//!
//! This crate provides:
//! - [`translate_nl_to_fol`] / [`translate_fol_to_nl`] - One-shot translation
//!   with the standard vocabulary
//! - [`Translator`] - The same operations over any [`Vocabulary`]
//! - [`Direction`] - Which way a piece of text is translated
//! - [`CORPUS`] - Canonical sentence/formula pairs
//!
//! Both directions report failures as [`folnl_foundation::Error`]; blank input
//! is rejected before the parser or converter runs.
//!
//! # Example
//!
//! ```
//! use folnl_translator::{translate_fol_to_nl, translate_nl_to_fol};
//!
//! assert_eq!(
//!     translate_nl_to_fol("Every human is mortal").unwrap(),
//!     "∀x(Human(x) → Mortal(x))"
//! );
//! assert_eq!(
//!     translate_fol_to_nl("Loves(alice, bob)").unwrap(),
//!     "Alice loves Bob."
//! );
//! ```
//!
//! [`Vocabulary`]: folnl_vocabulary::Vocabulary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod corpus;
pub mod direction;
pub mod translator;

pub use corpus::{CORPUS, Example};
pub use direction::{Direction, UnknownDirection};
pub use translator::{Translator, translate_fol_to_nl, translate_nl_to_fol};
