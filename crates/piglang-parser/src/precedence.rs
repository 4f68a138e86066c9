//! Operator precedence ladder for the Pratt parser (§4.2.1).

use piglang_lex::TokenKind;

/// Binding strength, ascending. Declaration order doubles as derive
/// ordering, so `Precedence::Lowest < Precedence::Call` holds directly —
/// no manual discriminants needed.
///
/// `Prefix` and `Call` are never looked up from a token: `Prefix` is used
/// programmatically as the recursion level for unary `!`/`-`, and `Call`
/// is reserved for call-expression parsing, which this front-end doesn't
/// implement (see `SPEC_FULL.md`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

/// Maps an infix operator token to its precedence level. Anything not
/// listed — including tokens that can never appear in infix position —
/// is `Lowest`, which is what stops the Pratt loop.
pub fn precedence_of(kind: TokenKind) -> Precedence {
    use TokenKind::*;
    match kind {
        Eq | NotEq => Precedence::Equals,
        Lt | Gt => Precedence::LessGreater,
        Plus | Minus => Precedence::Sum,
        Asterisk | Slash => Precedence::Product,
        _ => Precedence::Lowest,
    }
}
