//! Error types and error reporting for the lexer drivers.
//!
//! This module defines the errors reported around a lexing pass. It includes:
//!
//! - Error structures with source position information
//! - Variants for invalid tokens, unreadable files and unknown REPL commands
//! - Helpful error messages and suggestions

pub mod errors;
