//! Lexical analysis for TINY source text.
//!
//! This module contains the scanner that converts source code into the
//! token stream consumed by the parser. It handles:
//!
//! - Recognition of reserved words, identifiers, numbers and symbols
//! - Line tracking for diagnostics
//! - Brace-delimited comments and whitespace
//! - Unrecognised characters, passed on as `Error` tokens
//!
//! The parser pulls tokens through the `TokenSource` trait, so any producer
//! of tokens can stand in for the scanner.

pub mod lexer;
pub mod source;
pub mod tokens;
