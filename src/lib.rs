#![allow(clippy::module_inception)]

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod render;

extern crate regex;

use crate::config::config::Config;
use crate::lexer::lexer::tokenize_into;
use crate::render::render::HtmlRenderer;

/// Half-open range of char offsets covered by a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Highlights `text` into an HTML span stream using `config`.
pub fn highlight(text: &str, config: &Config) -> String {
    let mut renderer = HtmlRenderer::new();
    tokenize_into(text, config, &mut renderer);
    renderer.into_html()
}
