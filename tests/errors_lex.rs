//! Lexical error tests through the public pipeline entry point.

mod common;

use common::compile_err;
use minipas::CompileError;
use minipas::lexer::LexErrorKind;

fn lexical_errors(source: &str) -> Vec<(LexErrorKind, usize)> {
    match compile_err(source) {
        CompileError::Lexical(errors) => errors
            .iter()
            .map(|error| (error.kind(), error.span().line))
            .collect(),
        other => panic!("Expected a lexical failure, got {:?}", other),
    }
}

#[test]
fn test_illegal_character_stops_the_pipeline() {
    let errors = lexical_errors("program p; begin x ?= 1 end.");
    assert_eq!(errors, vec![(LexErrorKind::IllegalChar, 1)]);
}

#[test]
fn test_all_illegal_characters_reported_with_lines() {
    let errors = lexical_errors("program p;\nvar # : integer;\nbegin @ end.");
    assert_eq!(
        errors,
        vec![
            (LexErrorKind::IllegalChar, 2),
            (LexErrorKind::IllegalChar, 3),
        ]
    );
}

#[test]
fn test_error_message_names_the_character() {
    let error = compile_err("program p; begin $ end.");
    let CompileError::Lexical(errors) = error else {
        panic!("Expected a lexical failure");
    };
    assert_eq!(errors[0].to_string(), "illegal character '$' at line 1");
}

#[test]
fn test_oversized_literal_is_lexical() {
    let errors = lexical_errors(
        "program p; var x : integer; begin x := 99999999999999999999 end.",
    );
    assert_eq!(errors, vec![(LexErrorKind::IntegerOverflow, 1)]);
}

#[test]
fn test_lexical_failure_precedes_parsing() {
    // The program is also syntactically broken, but the lexical stage
    // reports first and the parser never runs.
    let error = compile_err("program $ begin");
    assert!(matches!(error, CompileError::Lexical(_)));
}
