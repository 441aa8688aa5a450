//! Unit tests for parsing.

use super::*;
use crate::ast::{Expr, Stmt, SubroutineDecl, TypeName};
use crate::lexer::Lexer;

mod errors;

/// Helper function to parse input and return the Program.
fn parse(input: &str) -> Result<Program, ParseError> {
    let mut lexer = Lexer::new(input);
    let tokens = lexer.tokenize().unwrap_or_else(|errors| {
        panic!(
            "Lexer failed on parser test input {:?}: {} error(s)",
            input,
            errors.len()
        )
    });
    let mut parser = Parser::new(tokens);
    parser.parse()
}

/// Helper function to parse input, panicking on failure.
fn parse_ok(input: &str) -> Program {
    parse(input).unwrap_or_else(|error| panic!("Parse failed for {:?}: {}", input, error))
}

/// Helper function to parse input and return the error.
fn parse_err(input: &str) -> ParseError {
    match parse(input) {
        Ok(_) => panic!("Expected parse to fail for input {:?}", input),
        Err(error) => error,
    }
}

/// Wraps a statement in a minimal program and returns the parsed
/// statement list of the program body.
fn parse_body(body_code: &str) -> Vec<Stmt> {
    let input = format!("program t; var x, y : integer; b, c, d : boolean; begin {} end.", body_code);
    parse_ok(&input).block.body.statements
}

/// Parses an assignment statement and extracts its right-hand side.
fn parse_value(expr_code: &str) -> Expr {
    let statements = parse_body(&format!("x := {}", expr_code));
    match statements.into_iter().next() {
        Some(Stmt::Assign(assign)) => assign.value,
        other => panic!("Expected an assignment, got {:?}", other),
    }
}

// ===================
// Program structure
// ===================

#[test]
fn test_minimal_program() {
    let program = parse_ok("program p; begin end.");
    assert_eq!(program.name, "p");
    assert!(program.block.var_decls.is_empty());
    assert!(program.block.sub_decls.is_empty());
    // `begin end` holds exactly one empty statement.
    assert_eq!(program.block.body.statements.len(), 1);
    assert!(matches!(program.block.body.statements[0], Stmt::Empty));
}

#[test]
fn test_var_section_with_multiple_groups() {
    let program = parse_ok("program p; var x, y : integer; b : boolean; begin end.");
    assert_eq!(program.block.var_decls.len(), 2);

    let first = &program.block.var_decls[0];
    let names: Vec<&str> = first.names.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["x", "y"]);
    assert_eq!(first.ty, TypeName::Integer);

    let second = &program.block.var_decls[1];
    assert_eq!(second.names[0].name, "b");
    assert_eq!(second.ty, TypeName::Boolean);
}

#[test]
fn test_multiple_var_sections() {
    let program = parse_ok("program p; var x : integer; var y : boolean; begin end.");
    assert_eq!(program.block.var_decls.len(), 2);
}

#[test]
fn test_subroutine_before_var_section() {
    // Declaration sections may interleave; both lists keep source order.
    let program = parse_ok(
        "program p; \
         function f(x : integer) : integer; begin f := x end; \
         var y : integer; \
         begin end.",
    );
    assert_eq!(program.block.sub_decls.len(), 1);
    assert_eq!(program.block.var_decls.len(), 1);
    assert_eq!(program.block.var_decls[0].names[0].name, "y");
}

#[test]
fn test_procedure_declaration() {
    let program = parse_ok(
        "program p; procedure q(a, b : integer; c : boolean); begin end; begin end.",
    );
    assert_eq!(program.block.sub_decls.len(), 1);
    let SubroutineDecl::Procedure(decl) = &program.block.sub_decls[0] else {
        panic!("Expected a procedure declaration");
    };
    assert_eq!(decl.name, "q");
    assert_eq!(decl.params.len(), 2);
    assert_eq!(decl.params[0].names.len(), 2);
    assert_eq!(decl.params[0].ty, TypeName::Integer);
    assert_eq!(decl.params[1].names.len(), 1);
    assert_eq!(decl.params[1].ty, TypeName::Boolean);
    assert!(decl.entry.is_none());
}

#[test]
fn test_procedure_without_params() {
    let program = parse_ok("program p; procedure q; begin end; begin end.");
    let SubroutineDecl::Procedure(decl) = &program.block.sub_decls[0] else {
        panic!("Expected a procedure declaration");
    };
    assert!(decl.params.is_empty());
}

#[test]
fn test_function_declaration() {
    let program = parse_ok(
        "program p; function f(n : integer) : boolean; begin f := true end; begin end.",
    );
    let SubroutineDecl::Function(decl) = &program.block.sub_decls[0] else {
        panic!("Expected a function declaration");
    };
    assert_eq!(decl.name, "f");
    assert_eq!(decl.return_type, TypeName::Boolean);
    assert_eq!(decl.params.len(), 1);
}

#[test]
fn test_nested_subroutines() {
    let program = parse_ok(
        "program p; \
         procedure outer; \
           procedure inner; begin end; \
         begin inner() end; \
         begin outer() end.",
    );
    let SubroutineDecl::Procedure(outer) = &program.block.sub_decls[0] else {
        panic!("Expected a procedure declaration");
    };
    assert_eq!(outer.block.sub_decls.len(), 1);
    assert_eq!(outer.block.sub_decls[0].name(), "inner");
}

#[test]
fn test_param_slots_counts_declarator_sites() {
    let program = parse_ok(
        "program p; procedure q(a, b : integer; c : boolean); begin end; begin end.",
    );
    assert_eq!(program.block.sub_decls[0].param_slots(), 3);
}
