//! piglang-lex - Lexical Analyzer (Lexer/Tokenizer) for piglang
//!
//! piglang is a small, C-like, expression-oriented scripting language.
//! This crate turns a flat source string into a stream of [`Token`]s on
//! demand, one `next_token()` call at a time.
//!
//! # Scope
//!
//! The token alphabet is closed and small (see [`TokenKind`]): identifiers
//! are ASCII-only (`[A-Za-z_][A-Za-z_]*`, no digits once started, matching
//! the reference implementation exactly), integers are unsigned digit runs
//! decoded later by the parser, and there are no string, float, or
//! comment tokens. The lexer never fails outright — any byte it can't
//! classify becomes a `TokenKind::Illegal` token, leaving recovery to the
//! caller.
//!
//! # Example
//!
//! ```
//! use piglang_lex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("let x = 5;");
//! assert_eq!(lexer.next_token().kind, TokenKind::Let);
//! assert_eq!(lexer.next_token().kind, TokenKind::Ident);
//! ```

mod cursor;
mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::{lookup_ident, Token, TokenKind};
