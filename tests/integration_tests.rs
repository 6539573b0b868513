//! Integration tests for end-to-end highlighting.
//!
//! These tests verify the complete pipeline from raw text through
//! tokenization, style resolution, and HTML rendering.

use std::collections::HashSet;

use highlighter::{
    config::config::{Config, Styles},
    highlight,
    lexer::{lexer::tokenize, tokens::TokenType},
};

const CORPUS: &[&str] = &[
    "",
    "a",
    "1/2",
    "= /a\\/b/;",
    "'it\\'s'",
    "\"unterminated",
    "/* never closed",
    "<!-- note --> x",
    "# hash\n// slash\n",
    "a   b\t\nc",
    "</div>",
    "x = y /* c */ / z",
    "fn add(a, b) { return a + b; }",
    "h\u{00e9}llo \u{2014} w\u{00f6}rld",
];

#[test]
fn test_lossless_over_corpus() {
    let config = Config::default();

    for source in CORPUS {
        let rebuilt: String = tokenize(source, &config)
            .iter()
            .map(|segment| segment.content.as_str())
            .collect();
        assert_eq!(&rebuilt, source, "lossy segmentation of {:?}", source);
    }
}

#[test]
fn test_spans_partition_over_corpus() {
    let config = Config::default();

    for source in CORPUS {
        let segments = tokenize(source, &config);
        let mut offset = 0;
        for segment in &segments {
            assert_eq!(segment.span.start, offset, "gap or overlap in {:?}", source);
            assert_eq!(segment.span.len(), segment.content.chars().count());
            assert!(!segment.content.is_empty(), "empty segment in {:?}", source);
            offset = segment.span.end;
        }
        assert_eq!(offset, source.chars().count());
    }
}

#[test]
fn test_highlight_escapes_html() {
    let html = highlight("a<b", &Config::default());

    assert_eq!(
        html,
        "<span>a</span><span style=\"opacity: 0.5\">&lt;</span><span>b</span>"
    );
}

#[test]
fn test_highlight_with_custom_styles() {
    let mut styles = Styles::default();
    styles.set("keyword", "color: blue").unwrap();
    let config = Config::new(Some(styles), None);

    let html = highlight("return", &config);
    assert_eq!(html, "<span style=\"color: blue\">return</span>");
}

#[test]
fn test_highlight_with_custom_keywords() {
    let keywords: HashSet<String> = [String::from("bespoke")].into_iter().collect();
    let config = Config::new(None, Some(keywords));
    let segments = tokenize("bespoke return", &config);

    assert_eq!(segments[0].style, Some(String::from("font-weight: 600")));
    assert_eq!(segments[2].style, None); // "return" is no longer a keyword
}

#[test]
fn test_unterminated_string_is_one_segment() {
    let segments = tokenize("\"abc", &Config::default());

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].kind, TokenType::StringDouble);
    assert_eq!(segments[0].content, "\"abc");
}

#[test]
fn test_mixed_snippet_segmentation() {
    let source = "if (x) { return 1/2; } // half";
    let segments = tokenize(source, &Config::default());

    let kinds: Vec<TokenType> = segments.iter().map(|segment| segment.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenType::Word,                   // if
            TokenType::Whitespace,
            TokenType::Operator,               // (
            TokenType::Word,                   // x
            TokenType::ClosingBrace,           // )
            TokenType::Whitespace,
            TokenType::Operator,               // {
            TokenType::Whitespace,
            TokenType::Word,                   // return
            TokenType::Whitespace,
            TokenType::Word,                   // 1
            TokenType::Operator,               // / is division after a word
            TokenType::Word,                   // 2
            TokenType::Operator,               // ;
            TokenType::Whitespace,
            TokenType::Operator,               // }
            TokenType::Whitespace,
            TokenType::SingleLineCommentSlash, // // half
        ]
    );
}
