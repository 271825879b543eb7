//! First-order logic to natural-language converter.
//!
//! Reads formulas such as `∀x(Human(x) → Mortal(x))` directly from their
//! characters and renders English such as
//! "For every individual, if they are human, then they are mortal."
//!
//! # Modules
//!
//! - [`reader`] - Character cursor over a formula
//! - [`pronouns`] - Pronoun forms bound to quantified variables
//! - [`scope`] - Lexical binding scopes with restore-on-drop guards
//! - [`inflect`] - Copula and verb agreement
//! - [`converter`] - Recursive-descent renderer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod converter;
pub mod inflect;
pub mod pronouns;
pub mod reader;
pub mod scope;

pub use converter::{Converter, convert_fol_to_natural_language};
pub use pronouns::{PronounForms, Role};
pub use scope::{BindingScopes, ScopeGuard, Scoped};
