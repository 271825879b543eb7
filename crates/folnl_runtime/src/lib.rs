//! REPL, CLI, session transcripts, and practice exercises for folnl.
//!
//! This crate provides:
//! - [`Repl`] - Interactive translation loop
//! - [`Session`] - Transcript of translations, saved as `MessagePack`
//! - [`ChallengeManager`] - Block-ordering translation exercises
//! - [`RuntimeConfig`] - Settings shared by the binary and the REPL
//! - [`init_logging`] - `tracing` subscriber setup for the binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod blocks;
pub mod config;
pub mod editor;
pub mod highlight;
pub mod logging;
pub mod notation;
pub mod practice;
pub mod repl;
pub mod serialize;
pub mod session;

pub use config::RuntimeConfig;
pub use logging::init_logging;
pub use practice::{Block, Challenge, ChallengeManager, PracticeMode, Verdict};
pub use repl::{Repl, Reply};
pub use session::{Entry, Outcome, Session};
