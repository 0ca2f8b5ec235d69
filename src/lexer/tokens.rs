use lazy_static::lazy_static;
use std::{
    collections::HashMap,
    fmt::{Display, Write},
};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("in", TokenKind::In);
        map.insert("fun", TokenKind::Fun);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("print", TokenKind::Print);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("unit", TokenKind::Unit);
        map.insert("not", TokenKind::Not);
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map
    };
}

/// Width every kind label is padded to by [`token_to_string`].
pub const LABEL_WIDTH: usize = 33;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Keywords
    Let,
    In,
    Fun,
    If,
    Then,
    Else,
    Print,
    True,
    False,
    Unit,

    // Literals
    Number,
    String,
    Identifier,

    Assign, // =
    Arrow,  // =>
    OpenParen,
    CloseParen,
    Comma,
    Pipe, // |>

    Plus,
    Dash,
    Star,
    Slash,

    Not,
    And,
    Or,

    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    Equals,    // ==
    NotEquals, // !=

    Invalid,
    EOF,
}

impl TokenKind {
    /// Fixed human-readable name used in token dumps.
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Let => "KEYWORD LET",
            TokenKind::In => "KEYWORD IN",
            TokenKind::Fun => "KEYWORD FUN",
            TokenKind::If => "KEYWORD IF",
            TokenKind::Then => "KEYWORD THEN",
            TokenKind::Else => "KEYWORD ELSE",
            TokenKind::Print => "KEYWORD PRINT",
            TokenKind::True => "KEYWORD TRUE",
            TokenKind::False => "KEYWORD FALSE",
            TokenKind::Unit => "KEYWORD UNIT",
            TokenKind::Number => "NUMERIC LITERAL",
            TokenKind::String => "STRING LITERAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Arrow => "ARROW",
            TokenKind::OpenParen => "LEFT PAREN",
            TokenKind::CloseParen => "RIGHT PAREN",
            TokenKind::Comma => "COMMA",
            TokenKind::Pipe => "OPERATOR PIPE",
            TokenKind::Plus => "OPERATOR ADD",
            TokenKind::Dash => "OPERATOR SUB",
            TokenKind::Star => "OPERATOR MUL",
            TokenKind::Slash => "OPERATOR DIV",
            TokenKind::Not => "OPERATOR NOT",
            TokenKind::And => "OPERATOR AND",
            TokenKind::Or => "OPERATOR OR",
            TokenKind::Less => "OPERATOR LESS THAN",
            TokenKind::LessEquals => "OPERATOR LESS THAN OR EQUAL TO",
            TokenKind::Greater => "OPERATOR GREATER THAN",
            TokenKind::GreaterEquals => "OPERATOR GREATER THAN OR EQUAL TO",
            TokenKind::Equals => "OPERATOR EQUAL TO",
            TokenKind::NotEquals => "OPERATOR NOT EQUAL TO",
            TokenKind::Invalid => "INVALID TOKEN",
            TokenKind::EOF => "END OF FILE",
        }
    }

    /// `not`, `and` and `or` are spelled like keywords but are operators.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Let
                | TokenKind::In
                | TokenKind::Fun
                | TokenKind::If
                | TokenKind::Then
                | TokenKind::Else
                | TokenKind::Print
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Unit
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A classified slice of the source. Holds offsets only, never text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub length: usize,
    /// Line the token starts on (1-based).
    pub line: u32,
}

impl Token {
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    pub fn span(&self) -> Span {
        Span {
            start: self.start,
            end: self.end(),
        }
    }

    /// The exact source text this token covers.
    ///
    /// Returns an empty string if the token does not belong to `source`.
    pub fn lexeme<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.start..self.end()).unwrap_or("")
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}..{} (line {})", self.kind, self.start, self.end(), self.line)
    }
}

/// Renders `token` as `<LABEL> @ <start>..<end> <lexeme>` for token dumps.
pub fn token_to_string(source: &str, token: &Token) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "{:<width$} @ {}..{} ",
        token.kind.label(),
        token.start,
        token.end(),
        width = LABEL_WIDTH
    );
    out.push_str(token.lexeme(source));
    out
}
