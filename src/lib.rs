//! folnl - Bidirectional translation between constrained English and
//! first-order logic.
//!
//! This crate re-exports all layers of the folnl system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: folnl_runtime    - REPL, CLI, transcripts, practice exercises
//! Layer 3: folnl_translator - Translation facade, direction, corpus
//! Layer 2: folnl_parser     - Tokenizer, English → FOL parser
//!          folnl_logic      - FOL reader, FOL → English converter
//! Layer 1: folnl_vocabulary - Predicates, constants, phrase tables
//! Layer 0: folnl_foundation - Error taxonomy and Result alias
//! ```

pub use folnl_foundation as foundation;
pub use folnl_logic as logic;
pub use folnl_parser as parser;
pub use folnl_runtime as runtime;
pub use folnl_translator as translator;
pub use folnl_vocabulary as vocabulary;
