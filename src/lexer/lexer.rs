use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    config::config::Config,
    render::render::{OutputSink, SegmentCollector},
    Span, MK_SEGMENT,
};

use super::{
    scanner::Scanner,
    tokens::{Segment, TokenType},
};

lazy_static! {
    static ref WORD_CHAR: Regex = Regex::new("[A-Za-z0-9_$]").unwrap();
    static ref NON_WHITESPACE: Regex = Regex::new("\\S").unwrap();
    static ref CLOSING_BRACE: Regex = Regex::new("[\\])]").unwrap();
    static ref PUNCTUATION: Regex = Regex::new("[/{}\\[(\\-+*=<>:;|\\\\.,?!&@~]").unwrap();
}

fn char_matches(pattern: &Regex, c: char) -> bool {
    pattern.is_match(&c.to_string())
}

/// Per-invocation lexer state. Created fresh for each text to highlight and
/// discarded once the final segment has been emitted.
pub struct Lexer {
    scanner: Scanner,
    token: String,
    token_len: usize,
    token_type: TokenType,
    last_meaningful: Option<TokenType>,
}

impl Lexer {
    pub fn new(text: &str) -> Lexer {
        Lexer {
            scanner: Scanner::new(text),
            token: String::new(),
            token_len: 0,
            token_type: TokenType::Whitespace,
            last_meaningful: None,
        }
    }

    fn multichar(&self) -> bool {
        self.token_len > 1
    }

    /// Decides whether the open token ends before consuming the current
    /// character. End of input closes any token unconditionally, so an
    /// unterminated string or comment is still emitted with whatever
    /// content it accumulated.
    fn should_finalize(&self) -> bool {
        let current = match self.scanner.current() {
            Some(c) => c,
            None => return true,
        };

        match self.token_type {
            // whitespace runs are merged into a single token
            TokenType::Whitespace => char_matches(&NON_WHITESPACE, current),
            TokenType::Operator | TokenType::ClosingBrace => true,
            TokenType::Word => !char_matches(&WORD_CHAR, current),
            // the multichar guard keeps the opening slash from also
            // counting as the closing one
            TokenType::Regex => {
                (self.scanner.prev1() == Some('/') || self.scanner.prev1() == Some('\n'))
                    && self.multichar()
            }
            TokenType::StringDouble | TokenType::StringSingle => {
                self.scanner.prev1() == self.token_type.quote_char() && self.multichar()
            }
            TokenType::XmlComment => {
                self.scanner.behind(3) == Some('-')
                    && self.scanner.prev2() == Some('-')
                    && self.scanner.prev1() == Some('>')
            }
            TokenType::MultiLineComment => {
                self.scanner.prev2() == Some('*') && self.scanner.prev1() == Some('/')
            }
            TokenType::SingleLineCommentSlash | TokenType::SingleLineCommentHash => {
                current == '\n'
            }
        }
    }

    /// Determines the type of the token starting at the cursor. The checks
    /// overlap, so their order encodes precedence: first match wins.
    fn classify(&self) -> TokenType {
        let current = match self.scanner.current() {
            Some(c) => c,
            None => return TokenType::Whitespace,
        };

        if current == '#' {
            TokenType::SingleLineCommentHash
        } else if current == '/' && self.scanner.lookahead(1) == Some('/') {
            TokenType::SingleLineCommentSlash
        } else if current == '/' && self.scanner.lookahead(1) == Some('*') {
            TokenType::MultiLineComment
        } else if current == '<'
            && self.scanner.lookahead(1) == Some('!')
            && self.scanner.lookahead(2) == Some('-')
            && self.scanner.lookahead(3) == Some('-')
        {
            TokenType::XmlComment
        } else if current == '\'' {
            TokenType::StringSingle
        } else if current == '"' {
            TokenType::StringDouble
        } else if current == '/'
            // a slash is a regex only where a value is expected, i.e. after
            // an operator; after a word or closing brace it is division
            && matches!(
                self.last_meaningful,
                Some(TokenType::Whitespace) | Some(TokenType::Operator)
            )
            // workaround for xml closing tags such as </div>
            && self.scanner.prev1() != Some('<')
        {
            TokenType::Regex
        } else if char_matches(&WORD_CHAR, current) {
            TokenType::Word
        } else if char_matches(&CLOSING_BRACE, current) {
            TokenType::ClosingBrace
        } else if char_matches(&PUNCTUATION, current) {
            TokenType::Operator
        } else {
            TokenType::Whitespace
        }
    }
}

/// Runs the driver loop over `text`, emitting styled segments to `sink`.
///
/// One implicit state per `TokenType`; a transition is finalize-then-classify.
/// The initial state is `Whitespace` and any state is a valid terminal.
pub fn tokenize_into(text: &str, config: &Config, sink: &mut dyn OutputSink) {
    let mut lexer = Lexer::new(text);

    loop {
        if lexer.should_finalize() {
            if !lexer.token.is_empty() {
                let span = Span {
                    start: lexer.scanner.pos() - lexer.token_len,
                    end: lexer.scanner.pos(),
                };
                let style = config.style_for(lexer.token_type, &lexer.token);
                let content = std::mem::take(&mut lexer.token);
                sink.emit(MK_SEGMENT!(lexer.token_type, content, style, span));
            }

            // whitespace and comments never count as the last meaningful
            // token, so they cannot flip regex detection on or off
            if lexer.token_type != TokenType::Whitespace && !lexer.token_type.is_comment() {
                lexer.last_meaningful = Some(lexer.token_type);
            }

            lexer.token.clear();
            lexer.token_len = 0;

            if lexer.scanner.at_eof() {
                break;
            }

            lexer.token_type = lexer.classify();
        }

        // the character that triggered the finalize belongs to the new token
        if let Some(c) = lexer.scanner.current() {
            lexer.token.push(c);
            lexer.token_len += 1;
        }

        lexer.scanner.advance(lexer.token_type);
    }
}

/// Tokenizes `text` and collects the segments in memory.
pub fn tokenize(text: &str, config: &Config) -> Vec<Segment> {
    let mut collector = SegmentCollector::new();
    tokenize_into(text, config, &mut collector);
    collector.into_segments()
}
