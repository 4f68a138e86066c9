//! Statement nodes — the `Statement` category from the language's data
//! model.

use std::fmt;

use piglang_lex::Token;

use super::expr::Expr;
use super::Node;

/// Something that appears in statement position.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExprStmt),
    /// A bare block. The grammar in §6.3 never produces this from
    /// `parse_statement` directly — blocks only appear as the bodies of
    /// `if` and `fn` — but `Block` is itself a statement-shaped node, so
    /// it keeps a place in the `Stmt` enum per the data model.
    Block(Block),
}

impl Node for Stmt {
    fn token_literal(&self) -> &str {
        match self {
            Stmt::Let(s) => s.token.token_literal(),
            Stmt::Return(s) => s.token.token_literal(),
            Stmt::Expression(s) => s.expression.token_literal(),
            Stmt::Block(b) => b
                .statements
                .first()
                .map(Node::token_literal)
                .unwrap_or(""),
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let(s) => write!(f, "{s}"),
            Stmt::Return(s) => write!(f, "{s}"),
            Stmt::Expression(s) => write!(f, "{s}"),
            Stmt::Block(b) => write!(f, "{b}"),
        }
    }
}

/// `let name = value;`. `value` is absent only when parsing the
/// right-hand side failed — a syntactically complete program always has
/// it (see the Open Question decision in `SPEC_FULL.md`).
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub token: Token,
    pub name: super::expr::Identifier,
    pub value: Option<Expr>,
}

impl fmt::Display for LetStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = ", self.token.literal, self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{value}")?;
        }
        write!(f, ";")
    }
}

/// `return value;`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Option<Expr>,
}

impl fmt::Display for ReturnStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.token.literal)?;
        if let Some(value) = &self.value {
            write!(f, "{value}")?;
        }
        write!(f, ";")
    }
}

/// An expression used in statement position, e.g. `5 + 5;`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    pub token: Token,
    pub expression: Expr,
}

impl fmt::Display for ExprStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// A brace-delimited ordered sequence of statements: a function body or an
/// `if`/`else` branch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use piglang_lex::TokenKind;

    #[test]
    fn let_without_value_still_prints_semicolon() {
        let stmt = LetStmt {
            token: Token::new(TokenKind::Let, "let"),
            name: super::super::expr::Identifier {
                token: Token::new(TokenKind::Ident, "x"),
                value: "x".to_string(),
            },
            value: None,
        };
        assert_eq!(stmt.to_string(), "let x = ;");
    }

    #[test]
    fn block_concatenates_statements_without_separator() {
        let block = Block {
            statements: vec![
                Stmt::Expression(ExprStmt {
                    token: Token::new(TokenKind::Ident, "a"),
                    expression: Expr::Identifier(super::super::expr::Identifier {
                        token: Token::new(TokenKind::Ident, "a"),
                        value: "a".to_string(),
                    }),
                }),
                Stmt::Expression(ExprStmt {
                    token: Token::new(TokenKind::Ident, "b"),
                    expression: Expr::Identifier(super::super::expr::Identifier {
                        token: Token::new(TokenKind::Ident, "b"),
                        value: "b".to_string(),
                    }),
                }),
            ],
        };
        assert_eq!(block.to_string(), "ab");
    }
}
