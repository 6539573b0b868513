//! Configuration module for the highlighter.
//!
//! This module defines the read-only configuration consumed by the lexer:
//!
//! - The five semantic style classes and their default values
//! - The default multi-language keyword set
//! - Token-type to style resolution
//! - Keyed style overrides and keyword list loading for the CLI

pub mod config;
