use super::tokens::TokenType;

/// Character-level cursor over the input.
///
/// Exposes the current character, bounded lookahead, raw lookback, and the
/// two most recently consumed characters with escape substitution applied.
/// `None` serves both as the end-of-input sentinel and as the escape
/// sentinel, since neither may ever match a delimiter.
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    prev1: Option<char>,
    prev2: Option<char>,
}

impl Scanner {
    pub fn new(text: &str) -> Scanner {
        Scanner {
            chars: text.chars().collect(),
            pos: 0,
            prev1: None,
            prev2: None,
        }
    }

    /// The character at the cursor, or None past the end of input.
    pub fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// The character `n` positions ahead of the cursor.
    pub fn lookahead(&self, n: usize) -> Option<char> {
        self.chars.get(self.pos + n).copied()
    }

    /// The raw character `n` positions behind the cursor, with no escape
    /// substitution. Used for the multi-character comment terminators.
    pub fn behind(&self, n: usize) -> Option<char> {
        self.pos
            .checked_sub(n)
            .and_then(|i| self.chars.get(i))
            .copied()
    }

    /// The previously consumed character, with escape substitution applied.
    pub fn prev1(&self) -> Option<char> {
        self.prev1
    }

    /// The character consumed before `prev1`, with escape substitution.
    pub fn prev2(&self) -> Option<char> {
        self.prev2
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Consumes the current character, shifting it into the lookback pair.
    ///
    /// A character preceded by a backslash inside a non-comment token is
    /// recorded as the sentinel instead of itself, so an escaped delimiter
    /// can never satisfy a finalize condition. Comments are exempt: escape
    /// sequences inside comments are not special.
    pub fn advance(&mut self, open_type: TokenType) {
        self.prev2 = self.prev1;
        self.prev1 = if !open_type.is_comment() && self.prev1 == Some('\\') {
            None
        } else {
            self.current()
        };
        self.pos += 1;
    }
}
