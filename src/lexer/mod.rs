//! Lexical analysis for Llambda.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a flat stream of tokens. It handles:
//!
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking (byte span and line) for error reporting
//! - Comments and whitespace handling
//! - Rendering tokens for debug dumps

pub mod lexer;
pub mod tokens;
