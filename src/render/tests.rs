//! Unit tests for the rendering sinks.

use crate::lexer::tokens::{Segment, TokenType};
use crate::render::render::{HtmlRenderer, OutputSink, SegmentCollector};
use crate::Span;

fn segment(kind: TokenType, content: &str, style: Option<&str>) -> Segment {
    Segment {
        kind,
        content: String::from(content),
        style: style.map(String::from),
        span: Span {
            start: 0,
            end: content.chars().count(),
        },
    }
}

#[test]
fn test_collector_preserves_order() {
    let mut collector = SegmentCollector::new();
    collector.emit(segment(TokenType::Word, "a", None));
    collector.emit(segment(TokenType::Whitespace, " ", None));
    collector.emit(segment(TokenType::Word, "b", None));

    let segments = collector.into_segments();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].content, "a");
    assert_eq!(segments[1].content, " ");
    assert_eq!(segments[2].content, "b");
}

#[test]
fn test_html_styled_span() {
    let mut renderer = HtmlRenderer::new();
    renderer.emit(segment(TokenType::Word, "return", Some("font-weight: 600")));

    assert_eq!(
        renderer.into_html(),
        "<span style=\"font-weight: 600\">return</span>"
    );
}

#[test]
fn test_html_unstyled_span_has_no_attribute() {
    let mut renderer = HtmlRenderer::new();
    renderer.emit(segment(TokenType::Whitespace, "  ", None));

    assert_eq!(renderer.into_html(), "<span>  </span>");
}

#[test]
fn test_html_escapes_content() {
    let mut renderer = HtmlRenderer::new();
    renderer.emit(segment(TokenType::Operator, "<", None));
    renderer.emit(segment(TokenType::Word, "a", None));
    renderer.emit(segment(TokenType::Operator, "&", None));

    assert_eq!(
        renderer.into_html(),
        "<span>&lt;</span><span>a</span><span>&amp;</span>"
    );
}

#[test]
fn test_html_escapes_style_attribute() {
    let mut renderer = HtmlRenderer::new();
    renderer.emit(segment(TokenType::Word, "x", Some("font-family: \"Mono\"")));

    assert_eq!(
        renderer.into_html(),
        "<span style=\"font-family: &quot;Mono&quot;\">x</span>"
    );
}
