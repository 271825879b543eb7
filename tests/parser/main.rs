//! Integration tests for the folnl_parser and folnl_vocabulary crates.
//!
//! Tests for the sentence-to-formula pipeline:
//! - Vocabulary lookup and classification
//! - Tokenization
//! - Full parser pipeline

mod parser_tests;
mod vocabulary_tests;
