//! Expression nodes — the `Expression` category from the language's data
//! model. Every variant re-prints to the exact canonical form the spec's
//! re-printing contract requires, which is what the round-trip tests in
//! `tests/` rely on.

use std::fmt;

use piglang_lex::Token;

use super::stmt::Block;
use super::Node;

/// Something that produces a value: identifiers, literals, and the
/// compound forms built on top of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    BooleanLiteral(BooleanLiteral),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    If(IfExpr),
    FunctionLiteral(FunctionLiteral),
}

impl Node for Expr {
    fn token_literal(&self) -> &str {
        match self {
            Expr::Identifier(e) => e.token.token_literal(),
            Expr::IntegerLiteral(e) => e.token.token_literal(),
            Expr::BooleanLiteral(e) => e.token.token_literal(),
            Expr::Prefix(e) => e.token.token_literal(),
            Expr::Infix(e) => e.token.token_literal(),
            Expr::If(e) => e.token.token_literal(),
            Expr::FunctionLiteral(e) => e.token.token_literal(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(e) => write!(f, "{e}"),
            Expr::IntegerLiteral(e) => write!(f, "{e}"),
            Expr::BooleanLiteral(e) => write!(f, "{e}"),
            Expr::Prefix(e) => write!(f, "{e}"),
            Expr::Infix(e) => write!(f, "{e}"),
            Expr::If(e) => write!(f, "{e}"),
            Expr::FunctionLiteral(e) => write!(f, "{e}"),
        }
    }
}

/// `[A-Za-z_][A-Za-z_]*`.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// A decimal integer literal, decoded as signed 64-bit.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl fmt::Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token.literal)
    }
}

/// `true` or `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

impl fmt::Display for BooleanLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token.literal)
    }
}

/// A prefix expression: `!right` or `-right`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub token: Token,
    pub operator: String,
    pub right: Box<Expr>,
}

impl fmt::Display for PrefixExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

/// A binary expression: `left op right`.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    pub token: Token,
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
}

impl fmt::Display for InfixExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

/// `if (condition) { consequence } else { alternative }`, alternative
/// optional.
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub token: Token,
    pub condition: Box<Expr>,
    pub consequence: Block,
    pub alternative: Option<Block>,
}

impl fmt::Display for IfExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if{} {}", self.condition, self.consequence)?;
        if let Some(alt) = &self.alternative {
            write!(f, "else {alt}")?;
        }
        Ok(())
    }
}

/// `fn(p1, p2, ...) { body }`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: Block,
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<String> = self.parameters.iter().map(|p| p.value.clone()).collect();
        write!(f, "fn ( {} ) {}", params.join(", "), self.body)
    }
}
