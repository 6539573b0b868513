use lazy_static::lazy_static;
use std::collections::HashSet;
use std::fs::read_to_string;
use std::path::Path;

use crate::errors::errors::HighlightError;
use crate::lexer::tokens::TokenType;

// Case-sensitive union of keywords across C-like and scripting languages.
// Membership only affects which style a Word token receives.
const DEFAULT_KEYWORD_LIST: &[&str] = &[
    "abstract", "alias", "and", "arguments", "array", "asm", "assert", "auto",
    "base", "begin", "bool", "boolean", "break", "byte", "case", "catch",
    "char", "checked", "class", "clone", "compl", "const", "continue",
    "debugger", "decimal", "declare", "default", "defer", "deinit", "delegate",
    "delete", "do", "double", "echo", "elif", "else", "elseif", "elsif", "end",
    "ensure", "enum", "event", "except", "exec", "explicit", "export",
    "extends", "extension", "extern", "fallthrough", "false", "final",
    "finally", "fixed", "float", "for", "foreach", "friend", "from", "func",
    "function", "global", "goto", "guard", "if", "implements", "implicit",
    "import", "include", "include_once", "init", "inline", "inout",
    "instanceof", "int", "interface", "internal", "is", "lambda", "let",
    "lock", "long", "module", "mutable", "namespace", "NaN", "native", "new",
    "next", "nil", "not", "null", "object", "operator", "or", "out",
    "override", "package", "params", "private", "protected", "protocol",
    "public", "raise", "readonly", "redo", "ref", "register", "repeat",
    "require", "require_once", "rescue", "restrict", "retry", "return",
    "sbyte", "sealed", "self", "short", "signed", "sizeof", "static",
    "string", "struct", "subscript", "super", "switch", "synchronized",
    "template", "then", "this", "throw", "throws", "transient", "true", "try",
    "typealias", "typedef", "typeid", "typename", "typeof", "unchecked",
    "undef", "undefined", "union", "unless", "unsigned", "until", "use",
    "using", "var", "virtual", "void", "volatile", "wchar_t", "when", "where",
    "while", "with", "xor", "yield",
];

lazy_static! {
    pub static ref DEFAULT_KEYWORDS: HashSet<&'static str> =
        DEFAULT_KEYWORD_LIST.iter().copied().collect();
}

/// Style strings for the five semantic classes. The values are opaque to the
/// core; an empty string means "no decoration".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styles {
    pub unformatted: String,
    pub punctuation: String,
    pub keyword: String,
    pub string: String,
    pub comment: String,
}

impl Default for Styles {
    fn default() -> Styles {
        Styles {
            unformatted: String::new(),
            punctuation: String::from("opacity: 0.5"),
            keyword: String::from("font-weight: 600"),
            string: String::from("opacity: 0.7"),
            comment: String::from("font-style: italic; opacity: 0.5"),
        }
    }
}

impl Styles {
    /// Sets one style class by name. Unknown keys are rejected rather than
    /// silently ignored so a CLI typo surfaces immediately.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), HighlightError> {
        match key {
            "unformatted" => self.unformatted = String::from(value),
            "punctuation" => self.punctuation = String::from(value),
            "keyword" => self.keyword = String::from(value),
            "string" => self.string = String::from(value),
            "comment" => self.comment = String::from(value),
            _ => {
                return Err(HighlightError::UnknownStyleKey {
                    key: String::from(key),
                })
            }
        }
        Ok(())
    }
}

/// Read-only configuration for one or more highlighting invocations.
#[derive(Debug, Clone)]
pub struct Config {
    pub styles: Styles,
    pub keywords: HashSet<String>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            styles: Styles::default(),
            keywords: DEFAULT_KEYWORDS.iter().map(|k| String::from(*k)).collect(),
        }
    }
}

impl Config {
    /// Merges caller-supplied pieces over the defaults. A missing piece
    /// falls back to the documented default rather than failing.
    pub fn new(styles: Option<Styles>, keywords: Option<HashSet<String>>) -> Config {
        Config {
            styles: styles.unwrap_or_default(),
            keywords: keywords.unwrap_or_else(|| Config::default().keywords),
        }
    }

    /// Resolves the style for a finalized token. `None` means the segment is
    /// emitted without a decoration wrapper.
    pub fn style_for(&self, kind: TokenType, content: &str) -> Option<String> {
        let style = match kind {
            TokenType::Whitespace => &self.styles.unformatted,
            TokenType::Operator | TokenType::ClosingBrace => &self.styles.punctuation,
            TokenType::Word => {
                if self.keywords.contains(content) {
                    &self.styles.keyword
                } else {
                    &self.styles.unformatted
                }
            }
            TokenType::Regex | TokenType::StringDouble | TokenType::StringSingle => {
                &self.styles.string
            }
            TokenType::XmlComment
            | TokenType::MultiLineComment
            | TokenType::SingleLineCommentSlash
            | TokenType::SingleLineCommentHash => &self.styles.comment,
        };

        if style.is_empty() {
            None
        } else {
            Some(style.clone())
        }
    }
}

/// Loads a keyword set from a file, one keyword per line. Blank lines are
/// skipped.
pub fn keywords_from_file(path: &Path) -> Result<HashSet<String>, HighlightError> {
    let content = read_to_string(path).map_err(|source| HighlightError::ReadInput {
        path: path.to_string_lossy().into_owned(),
        source,
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
