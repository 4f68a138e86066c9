//! Parser error taxonomy.
//!
//! Errors are accumulated, never thrown (§4.2.4, §7): every place that
//! would otherwise bail records one of these and returns `None` to its
//! caller, and the outer loop keeps making progress. `Parser::errors()`
//! exposes the accumulated messages as plain strings.

use piglang_lex::TokenKind;
use thiserror::Error;

/// One parse-time diagnostic. `Display` produces the exact wording the
/// language spec mandates, byte for byte.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// `expect_peek` saw something other than what it required.
    #[error("Expected next token to be {expected}, got {actual} instead.")]
    UnexpectedToken {
        expected: TokenKind,
        actual: TokenKind,
    },

    /// The current token cannot begin an expression.
    #[error("no prefix parse function found for token {0}")]
    NoPrefixParseFn(TokenKind),

    /// An `INT` token's literal didn't fit (or wasn't) a signed 64-bit
    /// decimal integer.
    #[error("Could not parse {0} as integer")]
    InvalidInteger(String),
}
