//! Parse error types.

use crate::token::{Span, Token, TokenKind};

/// The kind of parse error, for structured matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The grammar did not accept the current token.
    UnexpectedToken,
    /// The stream ended where the grammar required more input.
    UnexpectedEof,
}

/// An error that occurred during parsing.
///
/// The parser stops at the first offending token and reports it; there is
/// no error recovery.
///
/// # See Also
///
/// * [`crate::lexer::LexError`] - Similar error type for lexical errors
#[derive(Debug)]
pub struct ParseError {
    /// A human-readable description of the error.
    message: String,
    /// The source location where the error occurred.
    span: Span,
    /// The kind of error, for structured error handling.
    kind: ParseErrorKind,
}

impl ParseError {
    /// Creates an error reporting `token` as the first offending token.
    ///
    /// An `Eof` token becomes the dedicated end-of-file error; anything
    /// else is reported with its source spelling and line.
    pub fn unexpected(token: &Token) -> Self {
        match token.kind {
            TokenKind::Eof => ParseError {
                message: "unexpected end of file".to_string(),
                span: token.span,
                kind: ParseErrorKind::UnexpectedEof,
            },
            _ => ParseError {
                message: format!(
                    "error at '{}' line {}",
                    token.kind.lexeme(),
                    token.span.line
                ),
                span: token.span,
                kind: ParseErrorKind::UnexpectedToken,
            },
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the source location where the error occurred.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}
