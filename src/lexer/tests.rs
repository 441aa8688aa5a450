//! Unit tests for the lexer.

use super::*;
use crate::token::TokenKind;

/// Helper function to tokenize input and return only the kinds.
fn tokenize_kinds(input: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(input);
    lexer
        .tokenize()
        .unwrap_or_else(|errors| {
            panic!(
                "Tokenization failed for input {:?}: {} error(s)",
                input,
                errors.len()
            )
        })
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

/// Helper function to tokenize input and return the collected errors.
fn tokenize_errors(input: &str) -> Vec<LexError> {
    let mut lexer = Lexer::new(input);
    match lexer.tokenize() {
        Ok(tokens) => panic!(
            "Expected tokenization to fail for input {:?}, but it succeeded with {} tokens",
            input,
            tokens.len()
        ),
        Err(errors) => errors,
    }
}

// ===================
// Basic tokens
// ===================

#[test]
fn test_empty_input() {
    let kinds = tokenize_kinds("");
    assert_eq!(kinds, vec![TokenKind::Eof]);
}

#[test]
fn test_whitespace_only_input() {
    let kinds = tokenize_kinds("  \t \n\t  ");
    assert_eq!(kinds, vec![TokenKind::Eof]);
}

#[test]
fn test_minimal_program() {
    let kinds = tokenize_kinds("program p; begin end.");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Program,
            TokenKind::Identifier("p".to_string()),
            TokenKind::Semicolon,
            TokenKind::Begin,
            TokenKind::End,
            TokenKind::Dot,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_assignment_without_spaces() {
    let kinds = tokenize_kinds("x:=1");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier("x".to_string()),
            TokenKind::Assign,
            TokenKind::Number(1),
            TokenKind::Eof,
        ]
    );
}

// ===================
// Reserved words
// ===================

#[test]
fn test_all_reserved_words() {
    let kinds = tokenize_kinds(
        "program procedure function begin end var integer boolean \
         if then else while do read write true false not and or div",
    );
    assert_eq!(
        kinds,
        vec![
            TokenKind::Program,
            TokenKind::Procedure,
            TokenKind::Function,
            TokenKind::Begin,
            TokenKind::End,
            TokenKind::Var,
            TokenKind::Integer,
            TokenKind::Boolean,
            TokenKind::If,
            TokenKind::Then,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::Do,
            TokenKind::Read,
            TokenKind::Write,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Not,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Div,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_reserved_words_are_case_sensitive() {
    // Only lowercase spellings are reserved; anything else is an
    // ordinary identifier.
    let kinds = tokenize_kinds("Program BEGIN End");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier("Program".to_string()),
            TokenKind::Identifier("BEGIN".to_string()),
            TokenKind::Identifier("End".to_string()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_identifier_with_keyword_prefix() {
    let kinds = tokenize_kinds("beginning divide iff");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier("beginning".to_string()),
            TokenKind::Identifier("divide".to_string()),
            TokenKind::Identifier("iff".to_string()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_identifier_with_digits_and_underscores() {
    let kinds = tokenize_kinds("x1 a_b_2");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier("x1".to_string()),
            TokenKind::Identifier("a_b_2".to_string()),
            TokenKind::Eof,
        ]
    );
}

// ===================
// Operators: longest match
// ===================

#[test]
fn test_assign_vs_colon() {
    let kinds = tokenize_kinds(": :=");
    assert_eq!(
        kinds,
        vec![TokenKind::Colon, TokenKind::Assign, TokenKind::Eof]
    );
}

#[test]
fn test_relational_operators_longest_match() {
    let kinds = tokenize_kinds("< <= <> > >= =");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Less,
            TokenKind::LessEqual,
            TokenKind::NotEqual,
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Equal,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_adjacent_multi_char_operators() {
    // "<=>" must lex as '<=' then '>', never '<' '=' '>'.
    let kinds = tokenize_kinds("<=>");
    assert_eq!(
        kinds,
        vec![TokenKind::LessEqual, TokenKind::Greater, TokenKind::Eof]
    );
}

#[test]
fn test_punctuation() {
    let kinds = tokenize_kinds("( ) ; , . + - *");
    assert_eq!(
        kinds,
        vec![
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Eof,
        ]
    );
}

// ===================
// Integer literals
// ===================

#[test]
fn test_number_value() {
    let kinds = tokenize_kinds("0 42 007");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Number(0),
            TokenKind::Number(42),
            TokenKind::Number(7),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_number_i64_max() {
    let kinds = tokenize_kinds("9223372036854775807");
    assert_eq!(kinds, vec![TokenKind::Number(i64::MAX), TokenKind::Eof]);
}

#[test]
fn test_number_overflow_is_error() {
    let errors = tokenize_errors("9223372036854775808");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), LexErrorKind::IntegerOverflow);
}

// ===================
// Line tracking
// ===================

#[test]
fn test_line_numbers_across_newlines() {
    let mut lexer = Lexer::new("a\nb\n\nc");
    let tokens = lexer.tokenize().unwrap();
    let lines: Vec<usize> = tokens.iter().map(|t| t.span.line).collect();
    // a on line 1, b on line 2, c on line 4 (blank line 3), Eof on line 4.
    assert_eq!(lines, vec![1, 2, 4, 4]);
}

#[test]
fn test_span_byte_offsets() {
    let mut lexer = Lexer::new("ab := 1");
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(tokens[0].span.start, 0);
    assert_eq!(tokens[0].span.end, 2);
    assert_eq!(tokens[1].span.start, 3);
    assert_eq!(tokens[1].span.end, 5);
}

// ===================
// Errors
// ===================

#[test]
fn test_illegal_character() {
    let errors = tokenize_errors("$");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), LexErrorKind::IllegalChar);
    assert_eq!(errors[0].to_string(), "illegal character '$' at line 1");
}

#[test]
fn test_illegal_characters_are_all_collected() {
    // Scanning continues past each bad character so one run reports
    // every diagnostic.
    let errors = tokenize_errors("$ @\n#");
    assert_eq!(errors.len(), 3);
    let lines: Vec<usize> = errors.iter().map(|e| e.span().line).collect();
    assert_eq!(lines, vec![1, 1, 2]);
}

#[test]
fn test_leading_underscore_is_illegal() {
    // Identifiers must start with a letter; the underscore itself is the
    // illegal character.
    let errors = tokenize_errors("_x");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), LexErrorKind::IllegalChar);
    assert_eq!(errors[0].to_string(), "illegal character '_' at line 1");
}

#[test]
fn test_error_among_valid_tokens_discards_stream() {
    let errors = tokenize_errors("x := ? 1");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), LexErrorKind::IllegalChar);
}
