//! Error taxonomy and shared result types for folnl.
//!
//! This crate provides:
//! - [`Error`] - The single error type callers of the translator handle
//! - [`SyntaxError`] - Failures of the natural-language to FOL parser
//! - [`ConversionError`] - Failures of the FOL to natural-language converter
//! - [`InputKind`] - Which side of the translation an input belongs to

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;

pub use error::{ConversionError, Error, ErrorContext, ErrorKind, InputKind, Result, SyntaxError};
