//! End-to-end lexer scenarios and invariants.

use piglang_lex::{Lexer, TokenKind};
use proptest::prelude::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(source);
    let mut out = Vec::new();
    loop {
        let tok = lexer.next_token();
        let done = tok.kind == TokenKind::Eof;
        out.push(tok.kind);
        if done {
            break;
        }
    }
    out
}

#[test]
fn single_char_tokens_in_order() {
    use TokenKind::*;
    assert_eq!(
        kinds("=+(){},;"),
        vec![Assign, Plus, LParen, RParen, LBrace, RBrace, Comma, Semicolon, Eof]
    );
}

#[test]
fn let_fn_statement_full_sequence() {
    use TokenKind::*;
    let source = "let add = fn(x, y) { x + y; };";
    assert_eq!(
        kinds(source),
        vec![
            Let, Ident, Assign, Function, LParen, Ident, Comma, Ident, RParen, LBrace, Ident,
            Plus, Ident, Semicolon, RBrace, Semicolon, Eof,
        ]
    );
}

#[test]
fn eq_and_not_eq_are_atomic_two_char_tokens() {
    let mut lexer = Lexer::new("==");
    let tok = lexer.next_token();
    assert_eq!(tok.kind, TokenKind::Eq);
    assert_eq!(tok.literal, "==");
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);

    let mut lexer = Lexer::new("!=");
    let tok = lexer.next_token();
    assert_eq!(tok.kind, TokenKind::NotEq);
    assert_eq!(tok.literal, "!=");
}

#[test]
fn a_richer_program_lexes_token_by_token() {
    use TokenKind::*;
    let source = "if (5 < 10) { return true; } else { return false; }";
    assert_eq!(
        kinds(source),
        vec![
            If, LParen, Int, Lt, Int, RParen, LBrace, Return, True, Semicolon, RBrace, Else,
            LBrace, Return, False, Semicolon, RBrace, Eof,
        ]
    );
}

proptest! {
    /// Every token's literal is a substring of the input, except `Eof`
    /// whose literal is always empty (universal invariant, §8).
    #[test]
    fn token_literal_is_substring_of_input(source in "[ -~\n\t\r]{0,64}") {
        let mut lexer = Lexer::new(&source);
        loop {
            let tok = lexer.next_token();
            if tok.kind == TokenKind::Eof {
                prop_assert_eq!(tok.literal, "");
                break;
            }
            prop_assert!(source.contains(&tok.literal), "{:?} not found in {:?}", tok.literal, source);
        }
    }

    /// The lexer always terminates and never consumes more than one token
    /// worth of bytes without making forward progress (no infinite loop on
    /// arbitrary bytes, including ones with no valid token start).
    #[test]
    fn next_token_always_terminates(source in "[\x00-\x7f]{0,64}") {
        let mut lexer = Lexer::new(&source);
        let mut calls = 0;
        loop {
            let tok = lexer.next_token();
            calls += 1;
            prop_assert!(calls <= source.len() + 1, "lexer looped without terminating");
            if tok.kind == TokenKind::Eof {
                break;
            }
        }
    }
}
