//! Error types for the highlighter.
//!
//! The lexer itself is total: every character classifies and every state
//! has a defined finalize condition, so tokenization cannot fail. The
//! errors defined here cover the outer surfaces only:
//!
//! - Reading input and keyword files
//! - Writing rendered output
//! - Malformed command-line style overrides

pub mod errors;
