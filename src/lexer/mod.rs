//! Lexical analysis module for the highlighter.
//!
//! This module contains the single-pass lexer that converts raw text
//! into a stream of styled segments for rendering. It handles:
//!
//! - Language-agnostic tokenization using character-level heuristics
//! - Regex-literal vs. division disambiguation
//! - Escaped delimiters inside strings and regexes
//! - Multi-character comment terminators
//! - Keyword vs. plain word styling

pub mod lexer;
pub mod scanner;
pub mod tokens;
