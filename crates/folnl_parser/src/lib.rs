//! Natural-language to first-order logic parser.
//!
//! This crate turns sentences like "Every human is mortal" into formulas
//! like `∀x(Human(x) → Mortal(x))`.
//!
//! # Architecture
//!
//! ```text
//! "No student is a teacher."
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → [NO, NOUN(Student), IS, NOUN(Teacher), DOT, EOF]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   PARSER        │  → ¬∃x(Student(x) ∧ Teacher(x))
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`token`] - Token kinds produced by the tokenizer
//! - [`tokenizer`] - Convert raw sentences to a token stream
//! - [`parser`] - Recursive-descent parser emitting formula text

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod parser;
pub mod token;
pub mod tokenizer;

pub use parser::{Parser, parse_natural_language};
pub use token::{Token, TokenKind};
pub use tokenizer::{Tokenizer, tokenize};
