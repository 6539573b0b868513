//! Utility macros for the highlighter.
//!
//! This module defines helper macros used throughout the lexer:
//!
//! - `MK_SEGMENT!` - Creates a Segment instance
//!
//! These macros reduce boilerplate in the driver loop.

/// Creates a Segment instance.
///
/// # Arguments
///
/// * `$kind` - The TokenType
/// * `$content` - The segment's text content
/// * `$style` - The resolved style, or None for undecorated output
/// * `$span` - The char-offset span
///
/// # Example
///
/// ```ignore
/// let segment = MK_SEGMENT!(TokenType::Word, "return".to_string(), style, span);
/// ```
#[macro_export]
macro_rules! MK_SEGMENT {
    ($kind:expr, $content:expr, $style:expr, $span:expr) => {
        Segment {
            kind: $kind,
            content: $content,
            style: $style,
            span: $span,
        }
    };
}
