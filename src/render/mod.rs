//! Rendering module for the highlighter.
//!
//! This module defines the output side of the pipeline:
//!
//! - The `OutputSink` trait the driver loop emits segments into
//! - An in-memory collector for callers that want the raw segments
//! - An HTML renderer producing an escaped span stream

pub mod render;

#[cfg(test)]
mod tests;
