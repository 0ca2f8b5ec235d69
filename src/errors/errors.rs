use std::{fmt::Display, rc::Rc};

use thiserror::Error;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position,
};

/// A reportable problem found while driving the lexer.
///
/// The lexer itself never returns these; drivers build them from `Invalid`
/// tokens or from I/O and command failures.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Describe an `Invalid` token. Returns `None` for any other kind.
    pub fn from_invalid_token(source: &str, token: &Token, file: Rc<String>) -> Option<Self> {
        if token.kind != TokenKind::Invalid {
            return None;
        }

        let lexeme = token.lexeme(source);
        let error_impl = if lexeme.starts_with('"') {
            ErrorImpl::UnterminatedString
        } else {
            ErrorImpl::UnrecognisedToken {
                token: lexeme.to_string(),
            }
        };

        Some(Error::new(error_impl, Position(token.start, file)))
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::FileNotAccessible { .. } => "FileNotAccessible",
            ErrorImpl::UnknownCommand { .. } => "UnknownCommand",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { token } => match token.as_str() {
                "!" => ErrorTip::Suggestion(String::from(
                    "`!` is only valid in `!=`, use `not` for negation",
                )),
                "|" => ErrorTip::Suggestion(String::from("`|` is only valid in `|>`")),
                "." => ErrorTip::Suggestion(String::from(
                    "a decimal point must be followed by a digit",
                )),
                _ => ErrorTip::Suggestion(format!("Unrecognised token: `{}`", token)),
            },
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "String literal is missing its closing `\"`",
            )),
            ErrorImpl::FileNotAccessible { path } => {
                ErrorTip::Suggestion(format!("Could not access file {}", path))
            }
            ErrorImpl::UnknownCommand { .. } => ErrorTip::Suggestion(String::from(
                "Type :help for a list of commands",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}:{}", self.internal_error, self.position.1, self.position.0)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("could not access file {path:?}")]
    FileNotAccessible { path: String },
    #[error("unknown command {command:?}")]
    UnknownCommand { command: String },
}
