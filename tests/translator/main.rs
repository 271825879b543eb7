//! Cross-layer integration tests for folnl.
//!
//! Tests that drive the translator facade and the runtime built on it:
//! - Canonical corpus in both directions
//! - Facade properties
//! - Session transcripts and practice exercises

mod corpus_tests;
mod practice_tests;
mod properties;
mod session_tests;
