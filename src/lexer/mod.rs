//! Lexical analysis for the Pascal-like source language.
//!
//! This module turns source text into a stream of tokens for parsing. It
//! handles:
//!
//! - Recognition of reserved words, identifiers and numeric literals
//! - One-character lookahead operators (`:=`, `<=`, `>=`, `!=`)
//! - `{ ... }` comments and whitespace
//! - Line and column tracking for error reporting

pub mod lexer;
pub mod tokens;
