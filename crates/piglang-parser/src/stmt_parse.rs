//! Statement parsing: `parse_statement`'s dispatch (§4.2.3) and the
//! productions it dispatches to, plus `parse_block` which `if` and `fn`
//! bodies share.

use piglang_lex::TokenKind;

use crate::ast::stmt::{Block, ExprStmt, LetStmt, ReturnStmt};
use crate::ast::Stmt;
use crate::precedence::Precedence;
use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_statement(&mut self) -> Option<Stmt> {
        match self.current.kind {
            TokenKind::Let => self.parse_let(),
            TokenKind::Return => self.parse_return(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let IDENT = expr;`. The value is parsed at `Lowest` precedence, so
    /// the full expression grammar is available on the right-hand side.
    fn parse_let(&mut self) -> Option<Stmt> {
        let let_token = self.current.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = crate::ast::expr::Identifier {
            token: self.current.clone(),
            value: self.current.literal.clone(),
        };

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        self.advance();
        let value = self.parse_expression(Precedence::Lowest);

        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        Some(Stmt::Let(LetStmt {
            token: let_token,
            name,
            value,
        }))
    }

    /// `return expr;`.
    fn parse_return(&mut self) -> Option<Stmt> {
        let return_token = self.current.clone();

        self.advance();
        let value = self.parse_expression(Precedence::Lowest);

        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        Some(Stmt::Return(ReturnStmt {
            token: return_token,
            value,
        }))
    }

    /// A bare expression in statement position, e.g. `5 + 5;`. The
    /// trailing semicolon is optional so expressions work at a REPL
    /// prompt without one. Consumed even when the expression itself
    /// failed to parse, so a malformed statement doesn't leave its `;`
    /// behind to be mistaken for an empty statement of its own.
    fn parse_expression_statement(&mut self) -> Option<Stmt> {
        let token = self.current.clone();
        let expression = self.parse_expression(Precedence::Lowest);

        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        Some(Stmt::Expression(ExprStmt {
            token,
            expression: expression?,
        }))
    }

    /// Parses the body of an `if`/`fn` construct. `current` is the opening
    /// `{` on entry; consumes statements until a closing `}` or `Eof`.
    pub(crate) fn parse_block(&mut self) -> Block {
        let mut block = Block::default();
        self.advance();

        while !self.current_is(TokenKind::RBrace) && !self.current_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                block.statements.push(stmt);
            }
            self.advance();
        }

        block
    }
}
