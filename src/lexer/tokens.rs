//! Token reading and recognition for the lexer.
//!
//! This module provides methods for reading individual tokens: operators
//! and punctuation (longest match first), integer literals, and
//! identifiers with the reserved-word lookup.

use super::Lexer;
use super::error::LexError;
use crate::token::{Span, Token, TokenKind};

impl Lexer<'_> {
    /// Reads and returns the next token from the input.
    ///
    /// Called by [`tokenize`](super::Lexer::tokenize) with whitespace
    /// already skipped and at least one character remaining.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if the current character starts no legal
    /// token (the character is consumed so scanning can continue) or if
    /// an integer literal is out of range.
    pub(super) fn next_token(&mut self) -> Result<Token, LexError> {
        match self.current_char() {
            Some(c) if c.is_ascii_digit() => self.read_number(),
            Some(c) if c.is_ascii_alphabetic() => Ok(self.read_identifier()),
            _ => self.read_operator(),
        }
    }

    /// Reads an operator or punctuation token.
    ///
    /// The two-character operators `:=`, `<=`, `>=`, `<>` are tried before
    /// any single character, so `<` only becomes `Less` when no longer
    /// operator matches.
    fn read_operator(&mut self) -> Result<Token, LexError> {
        let start_pos = self.pos;
        let start_line = self.line;
        let start_column = self.column;

        let Some(c) = self.current_char() else {
            unreachable!("read_operator called at end of input");
        };

        let two_char = match (c, self.peek_char()) {
            (':', Some('=')) => Some(TokenKind::Assign),
            ('<', Some('=')) => Some(TokenKind::LessEqual),
            ('<', Some('>')) => Some(TokenKind::NotEqual),
            ('>', Some('=')) => Some(TokenKind::GreaterEqual),
            _ => None,
        };
        if let Some(kind) = two_char {
            self.advance();
            self.advance();
            let span = Span::new(start_pos, self.pos, start_line, start_column);
            return Ok(Token::new(kind, span));
        }

        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            ';' => TokenKind::Semicolon,
            ':' => TokenKind::Colon,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '=' => TokenKind::Equal,
            '<' => TokenKind::Less,
            '>' => TokenKind::Greater,
            _ => {
                let span = Span::new(
                    start_pos,
                    start_pos + c.len_utf8(),
                    start_line,
                    start_column,
                );
                // Consume the offending character so scanning continues
                // and later errors are still collected.
                self.advance();
                return Err(LexError::illegal_char(c, span));
            }
        };
        self.advance();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Ok(Token::new(kind, span))
    }

    /// Reads an integer literal: one or more decimal digits.
    fn read_number(&mut self) -> Result<Token, LexError> {
        let start_pos = self.pos;
        let start_line = self.line;
        let start_column = self.column;

        while matches!(self.current_char(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }

        let lexeme = &self.input[start_pos..self.pos];
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        match lexeme.parse::<i64>() {
            Ok(value) => Ok(Token::new(TokenKind::Number(value), span)),
            Err(_) => Err(LexError::integer_overflow(lexeme, span)),
        }
    }

    /// Reads an identifier or reserved word.
    ///
    /// An identifier starts with an ASCII letter and continues with
    /// letters, digits, or underscores. The finished lexeme is looked up
    /// in the reserved-word table; a hit yields the keyword token, a miss
    /// an identifier.
    fn read_identifier(&mut self) -> Token {
        let start_pos = self.pos;
        let start_line = self.line;
        let start_column = self.column;

        while matches!(self.current_char(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.advance();
        }

        let lexeme = &self.input[start_pos..self.pos];
        let kind = TokenKind::keyword(lexeme)
            .unwrap_or_else(|| TokenKind::Identifier(lexeme.to_string()));
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(kind, span)
    }
}
