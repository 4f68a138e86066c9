//! Expression parsing — the Pratt core (§4.2.3) plus the prefix and infix
//! parser tables it dispatches through (§4.2.2).

use piglang_lex::TokenKind;

use crate::ast::expr::{
    BooleanLiteral, Expr, FunctionLiteral, Identifier, IfExpr, InfixExpr, IntegerLiteral,
    PrefixExpr,
};
use crate::error::ParseError;
use crate::precedence::Precedence;
use crate::Parser;

impl<'a> Parser<'a> {
    /// The Pratt core: parses a prefix expression, then keeps folding
    /// infix operators into it as long as the next operator binds more
    /// tightly than `precedence`.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            if !is_infix_token(self.peek.kind) {
                return Some(left);
            }
            self.advance();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    /// Dispatches on `current.kind`. `NoPrefixParseFn` is recorded here,
    /// and only here — a registered parser that itself fails (e.g. an
    /// `INT` literal that doesn't fit) reports its own, more specific
    /// error instead (§7), so this arm must not fire for it.
    fn parse_prefix(&mut self) -> Option<Expr> {
        match self.current.kind {
            TokenKind::Ident => self.parse_identifier(),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::True | TokenKind::False => self.parse_boolean_literal(),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            _ => {
                self.push_error(ParseError::NoPrefixParseFn(self.current.kind));
                None
            }
        }
    }

    fn parse_infix(&mut self, left: Expr) -> Option<Expr> {
        match self.current.kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::Lt
            | TokenKind::Gt
            | TokenKind::Eq
            | TokenKind::NotEq => self.parse_infix_expression(left),
            _ => None,
        }
    }

    fn parse_identifier(&mut self) -> Option<Expr> {
        Some(Expr::Identifier(Identifier {
            token: self.current.clone(),
            value: self.current.literal.clone(),
        }))
    }

    /// Base-10 only; a literal that doesn't fit (or isn't) a signed 64-bit
    /// integer is recorded as `InvalidInteger` rather than panicking.
    fn parse_integer_literal(&mut self) -> Option<Expr> {
        match self.current.literal.parse::<i64>() {
            Ok(value) => Some(Expr::IntegerLiteral(IntegerLiteral {
                token: self.current.clone(),
                value,
            })),
            Err(_) => {
                self.push_error(ParseError::InvalidInteger(self.current.literal.clone()));
                None
            }
        }
    }

    fn parse_boolean_literal(&mut self) -> Option<Expr> {
        Some(Expr::BooleanLiteral(BooleanLiteral {
            token: self.current.clone(),
            value: self.current_is(TokenKind::True),
        }))
    }

    /// `!right` or `-right`: right-associative because the right operand
    /// recurses at `Precedence::Prefix`, binding everything but another
    /// prefix operator.
    fn parse_prefix_expression(&mut self) -> Option<Expr> {
        let token = self.current.clone();
        let operator = token.literal.clone();
        self.advance();
        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expr::Prefix(PrefixExpr {
            token,
            operator,
            right: Box::new(right),
        }))
    }

    /// Left-associative: the right operand recurses at the operator's own
    /// precedence (strict `<` in the Pratt loop), so a same-precedence
    /// operator to its right stops the recursion and is instead folded in
    /// by the caller's loop.
    fn parse_infix_expression(&mut self, left: Expr) -> Option<Expr> {
        let token = self.current.clone();
        let operator = token.literal.clone();
        let precedence = self.current_precedence();
        self.advance();
        let right = self.parse_expression(precedence)?;
        Some(Expr::Infix(InfixExpr {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }

    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(expr)
    }

    fn parse_if_expression(&mut self) -> Option<Expr> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.advance();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block())
        } else {
            None
        };

        Some(Expr::If(IfExpr {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    fn parse_function_literal(&mut self) -> Option<Expr> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block();

        Some(Expr::FunctionLiteral(FunctionLiteral {
            token,
            parameters,
            body,
        }))
    }

    /// Parses a comma-separated parameter list. `current` is `LParen` on
    /// entry; returns once `RParen` has been consumed.
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut params = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.advance();
            return Some(params);
        }

        self.advance();
        params.push(Identifier {
            token: self.current.clone(),
            value: self.current.literal.clone(),
        });

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.advance();
            params.push(Identifier {
                token: self.current.clone(),
                value: self.current.literal.clone(),
            });
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(params)
    }
}

/// Whether `kind` has a registered infix parser (§4.2.2). Every token with
/// a precedence above `Lowest` is in this set by construction, so this
/// only matters if that invariant is ever broken by a future extension.
fn is_infix_token(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::Lt
            | TokenKind::Gt
            | TokenKind::Eq
            | TokenKind::NotEq
    )
}
