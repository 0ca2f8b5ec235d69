use tracing::{debug, trace};

use crate::MK_TOKEN;

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Scanning state over a borrowed source buffer.
///
/// Every call to [`Lexer::next_token`] yields exactly one token. Malformed
/// input comes back as [`TokenKind::Invalid`]; the lexer never fails.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    start: usize,
    current: usize,
    line: u32,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            start: 0,
            current: 0,
            line: 1,
            finished: false,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn position(&self) -> usize {
        self.current
    }

    pub fn at_eof(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Byte at the cursor, `0` past the end.
    fn at(&self) -> u8 {
        self.byte_at(self.current)
    }

    fn peek(&self) -> u8 {
        self.byte_at(self.current + 1)
    }

    fn byte_at(&self, pos: usize) -> u8 {
        self.source.as_bytes().get(pos).copied().unwrap_or(0)
    }

    fn advance(&mut self) -> u8 {
        let c = self.at();
        self.current += 1;
        c
    }

    fn advance_n(&mut self, n: usize) {
        self.current = (self.current + n).min(self.source.len());
    }

    fn matches(&mut self, expected: u8) -> bool {
        if self.at_eof() || self.at() != expected {
            return false;
        }

        self.current += 1;
        true
    }

    fn skip_whitespace(&mut self) {
        while !self.at_eof() {
            match self.at() {
                b' ' | b'\r' | b'\t' => self.current += 1,
                b'\n' => {
                    self.line += 1;
                    self.current += 1;
                }
                b'#' => {
                    while !self.at_eof() && self.at() != b'\n' {
                        self.current += 1;
                    }
                }
                _ => return,
            }
        }
    }

    /// Scan the next token.
    ///
    /// Once the end of input is reached this keeps returning a zero-length
    /// `EOF` token at the end of the source.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        self.start = self.current;
        let line = self.line;
        let kind = self.next_kind();

        let token = MK_TOKEN!(kind, self.start, self.current - self.start, line);
        trace!(kind = ?token.kind, start = token.start, end = token.end(), line, "scanned token");
        token
    }

    fn next_kind(&mut self) -> TokenKind {
        if self.at_eof() {
            return TokenKind::EOF;
        }

        match self.advance() {
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(),
            b'0'..=b'9' => self.number(),
            b'"' => self.string(),
            b'(' => TokenKind::OpenParen,
            b')' => TokenKind::CloseParen,
            b',' => TokenKind::Comma,
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Dash,
            b'*' => TokenKind::Star,
            b'/' => TokenKind::Slash,
            b'!' => {
                if self.matches(b'=') {
                    TokenKind::NotEquals
                } else {
                    TokenKind::Invalid
                }
            }
            b'=' => {
                if self.matches(b'=') {
                    TokenKind::Equals
                } else if self.matches(b'>') {
                    TokenKind::Arrow
                } else {
                    TokenKind::Assign
                }
            }
            b'<' => {
                if self.matches(b'=') {
                    TokenKind::LessEquals
                } else {
                    TokenKind::Less
                }
            }
            b'>' => {
                if self.matches(b'=') {
                    TokenKind::GreaterEquals
                } else {
                    TokenKind::Greater
                }
            }
            b'|' => {
                if self.matches(b'>') {
                    TokenKind::Pipe
                } else {
                    TokenKind::Invalid
                }
            }
            0x80..=0xFF => {
                // Non-ASCII: take the whole character so spans stay on char boundaries.
                let width = self.source[self.start..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                self.advance_n(width - 1);
                TokenKind::Invalid
            }
            _ => TokenKind::Invalid,
        }
    }

    fn identifier(&mut self) -> TokenKind {
        while matches!(self.at(), b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_') {
            self.current += 1;
        }

        let lexeme = &self.source[self.start..self.current];
        RESERVED_LOOKUP
            .get(lexeme)
            .copied()
            .unwrap_or(TokenKind::Identifier)
    }

    fn number(&mut self) -> TokenKind {
        while self.at().is_ascii_digit() {
            self.current += 1;
        }

        // Only take the dot when a fractional digit follows it.
        if self.at() == b'.' && self.peek().is_ascii_digit() {
            self.current += 1;

            while self.at().is_ascii_digit() {
                self.current += 1;
            }
        }

        TokenKind::Number
    }

    fn string(&mut self) -> TokenKind {
        while !self.at_eof() && self.at() != b'"' {
            if self.at() == b'\\' {
                self.current += 1;
                if self.at_eof() {
                    break;
                }
            }

            if self.at() == b'\n' {
                self.line += 1;
            }
            self.current += 1;
        }

        if self.at_eof() {
            return TokenKind::Invalid;
        }

        self.current += 1; // closing quote
        TokenKind::String
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token up to and including the first `EOF`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.kind == TokenKind::EOF {
            self.finished = true;
        }
        Some(token)
    }
}

/// Scan all of `source`, returning every token including the final `EOF`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let tokens: Vec<Token> = Lexer::new(source).collect();
    debug!(
        tokens = tokens.len(),
        bytes = source.len(),
        "tokenized source"
    );
    tokens
}
