//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$start` - Byte offset of the first character
/// * `$length` - Length of the lexeme in bytes
/// * `$line` - Line the token starts on
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, 0, 2, 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $start:expr, $length:expr, $line:expr) => {
        Token {
            kind: $kind,
            start: $start,
            length: $length,
            line: $line,
        }
    };
}
