use std::fmt::Display;

use crate::Span;

/// Lexical category assigned to a run of input characters.
///
/// This is a closed set: every character falls into exactly one type, so
/// classification and finalization are total and no input can fail to lex.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenType {
    Whitespace,
    Operator,
    ClosingBrace,
    Word,
    Regex,
    StringDouble,
    StringSingle,
    XmlComment,
    MultiLineComment,
    SingleLineCommentSlash,
    SingleLineCommentHash,
}

impl TokenType {
    /// True for the four comment types. Comment tokens are styled uniformly,
    /// never update the last-meaningful-type tracking, and are exempt from
    /// escape substitution.
    pub fn is_comment(&self) -> bool {
        matches!(
            self,
            TokenType::XmlComment
                | TokenType::MultiLineComment
                | TokenType::SingleLineCommentSlash
                | TokenType::SingleLineCommentHash
        )
    }

    /// The quote character that opened a string token of this type.
    pub fn quote_char(&self) -> Option<char> {
        match self {
            TokenType::StringSingle => Some('\''),
            TokenType::StringDouble => Some('"'),
            _ => None,
        }
    }
}

impl Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One unit of output: a contiguous slice of the input plus its resolved
/// style. Segments are emitted in input order and concatenating their
/// contents reproduces the input exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub kind: TokenType,
    pub content: String,
    pub style: Option<String>,
    pub span: Span,
}

impl Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Segment {{\nkind: {},\ncontent: {}}}",
            self.kind, self.content
        )
    }
}
