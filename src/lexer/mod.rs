//! Lexical analyzer for the minipas compiler.
//!
//! This module provides the [`Lexer`] struct which converts source code
//! text into a stream of [`Token`]s for parsing.
//!
//! # Overview
//!
//! The lexer performs the following tasks:
//! - Scans the input character by character
//! - Recognizes reserved words, identifiers, integer literals, operators,
//!   and punctuation, longest match first (`:=` before `:`, `<=`/`<>`
//!   before `<`)
//! - Tracks line numbers for diagnostics
//! - Skips spaces, tabs, and line terminators
//! - Collects every illegal character instead of stopping at the first
//!
//! # Supported Tokens
//!
//! - **Reserved words**: `program`, `procedure`, `function`, `begin`,
//!   `end`, `var`, `integer`, `boolean`, `if`, `then`, `else`, `while`,
//!   `do`, `read`, `write`, `true`, `false`, `not`, `and`, `or`, `div` —
//!   case-sensitive, lowercase only
//! - **Identifiers**: an ASCII letter followed by ASCII letters, digits,
//!   or underscores
//! - **Integer literals**: sequences of ASCII digits, stored as `i64`;
//!   values exceeding `i64::MAX` are a lexical error
//! - **Operators and punctuation**: `:=` `<=` `>=` `<>` `+` `-` `*` `(`
//!   `)` `;` `:` `,` `.` `=` `<` `>`
//!
//! # Examples
//!
//! ```
//! use minipas::lexer::Lexer;
//! use minipas::token::TokenKind;
//!
//! let mut lexer = Lexer::new("x := 3");
//! let tokens = lexer.tokenize().unwrap();
//!
//! assert!(matches!(tokens[0].kind, TokenKind::Identifier(_)));
//! assert_eq!(tokens[1].kind, TokenKind::Assign);
//! assert_eq!(tokens[2].kind, TokenKind::Number(3));
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Error types for lexical analysis
//! - [`cursor`] - Position tracking and character navigation
//! - [`tokens`] - Token recognition and reading
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

mod cursor;
mod error;
mod tokens;

#[cfg(test)]
mod tests;

pub use error::{LexError, LexErrorKind};

use crate::token::{Span, Token, TokenKind};

/// A lexical analyzer for minipas source code.
///
/// The `Lexer` maintains its position within the input and tracks
/// line/column numbers for error reporting. It is designed to be used
/// once per source file.
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties the lexer to the input string slice,
/// ensuring the input remains valid while the lexer is in use.
pub struct Lexer<'a> {
    /// The input source code being tokenized.
    pub(super) input: &'a str,
    /// Current byte position in the input.
    pub(super) pos: usize,
    /// Current line number (1-indexed).
    pub(super) line: usize,
    /// Current column number (1-indexed).
    pub(super) column: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` for the given input string.
    ///
    /// The lexer starts at the beginning of the input with line and column
    /// numbers initialized to 1.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenizes the entire input.
    ///
    /// Consumes the input from start to end. The returned vector always
    /// ends with a [`TokenKind::Eof`] token, so it is never empty.
    ///
    /// # Errors
    ///
    /// Returns every [`LexError`] encountered, in source order. An illegal
    /// character is consumed and scanning continues, so a single run
    /// reports all of them; when any error occurred the token stream is
    /// discarded and the pipeline stops after this stage.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, Vec<LexError>> {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_eof() {
                let span = Span::new(self.pos, self.pos, self.line, self.column);
                tokens.push(Token::new(TokenKind::Eof, span));
                break;
            }

            match self.next_token() {
                Ok(token) => tokens.push(token),
                Err(error) => errors.push(error),
            }
        }

        if errors.is_empty() {
            Ok(tokens)
        } else {
            Err(errors)
        }
    }
}
