//! Identifier and keyword lexing.

use super::core::is_letter;
use crate::token::{lookup_ident, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes a run of `[A-Za-z_]` starting at the current byte, then
    /// looks the text up in the keyword table — a keyword token if it
    /// matches, `Ident` otherwise. Digits never extend an identifier, so
    /// `x1` lexes as `x` followed by the integer `1`.
    pub fn lex_identifier(&mut self) -> Token {
        let start = self.token_start();
        while is_letter(self.cursor().current()) {
            self.cursor().advance();
        }
        let text = self.cursor().slice(start, self.cursor().position());
        Token::new(lookup_ident(text), text)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, TokenKind};

    fn lex_one(source: &str) -> (TokenKind, String) {
        let mut lexer = Lexer::new(source);
        let tok = lexer.next_token();
        (tok.kind, tok.literal)
    }

    #[test]
    fn plain_identifier() {
        assert_eq!(lex_one("foobar"), (TokenKind::Ident, "foobar".into()));
    }

    #[test]
    fn identifier_with_underscore() {
        assert_eq!(lex_one("foo_bar"), (TokenKind::Ident, "foo_bar".into()));
    }

    #[test]
    fn digits_do_not_extend_an_identifier() {
        let mut lexer = Lexer::new("x1");
        assert_eq!(lexer.next_token().literal, "x");
        assert_eq!(lexer.next_token().literal, "1");
    }

    #[test]
    fn keywords_resolve_to_their_kind() {
        assert_eq!(lex_one("let").0, TokenKind::Let);
        assert_eq!(lex_one("fn").0, TokenKind::Function);
        assert_eq!(lex_one("return").0, TokenKind::Return);
        assert_eq!(lex_one("if").0, TokenKind::If);
        assert_eq!(lex_one("else").0, TokenKind::Else);
        assert_eq!(lex_one("true").0, TokenKind::True);
        assert_eq!(lex_one("false").0, TokenKind::False);
    }
}
