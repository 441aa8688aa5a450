//! Parse error tests.
//!
//! Tests for:
//! - Reporting at the first offending token
//! - The end-of-file error
//! - Message format

use super::parse_err;
use crate::parser::ParseErrorKind;

#[test]
fn test_missing_final_dot_reports_eof() {
    let error = parse_err("program p; begin end");
    assert_eq!(error.kind(), ParseErrorKind::UnexpectedEof);
    assert_eq!(error.to_string(), "unexpected end of file");
}

#[test]
fn test_truncated_expression_reports_eof() {
    let error = parse_err("program p; begin x := ");
    assert_eq!(error.kind(), ParseErrorKind::UnexpectedEof);
}

#[test]
fn test_trailing_tokens_after_dot() {
    let error = parse_err("program p; begin end. x");
    assert_eq!(error.kind(), ParseErrorKind::UnexpectedToken);
    assert_eq!(error.to_string(), "error at 'x' line 1");
}

#[test]
fn test_bare_identifier_is_not_a_statement() {
    // A call requires parentheses, so the token after the identifier is
    // the offending one.
    let error = parse_err("program p; begin x end.");
    assert_eq!(error.to_string(), "error at 'end' line 1");
}

#[test]
fn test_missing_semicolon_between_statements() {
    let error = parse_err("program p; begin x := 1 y := 2 end.");
    assert_eq!(error.to_string(), "error at 'y' line 1");
}

#[test]
fn test_relational_operators_do_not_chain() {
    // The relational tier is non-associative: after `1 < 2` the second
    // `<` cannot continue the expression.
    let error = parse_err("program p; begin if 1 < 2 < 3 then x := 1 end.");
    assert_eq!(error.to_string(), "error at '<' line 1");
}

#[test]
fn test_empty_parameter_list_is_rejected() {
    let error = parse_err("program p; procedure q(); begin end; begin end.");
    assert_eq!(error.to_string(), "error at ')' line 1");
}

#[test]
fn test_write_requires_an_argument() {
    let error = parse_err("program p; begin write() end.");
    assert_eq!(error.to_string(), "error at ')' line 1");
}

#[test]
fn test_missing_then() {
    let error = parse_err("program p; begin if true x := 1 end.");
    assert_eq!(error.to_string(), "error at 'x' line 1");
}

#[test]
fn test_function_requires_return_type() {
    let error = parse_err("program p; function f; begin f := 1 end; begin end.");
    assert_eq!(error.to_string(), "error at ';' line 1");
}

#[test]
fn test_error_line_number_tracks_newlines() {
    let error = parse_err("program p;\nbegin\n  x :=\n  then\nend.");
    assert_eq!(error.to_string(), "error at 'then' line 4");
}

#[test]
fn test_error_exposes_span() {
    let error = parse_err("program p; begin end. x");
    let span = error.span();
    assert_eq!(span.line, 1);
    assert!(span.start < span.end);
}
