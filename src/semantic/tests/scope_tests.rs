//! Tests for name resolution and scope discipline.
//!
//! Covers:
//! - Duplicate detection within one scope
//! - Outward resolution along the nesting chain
//! - Shadowing and sibling-scope isolation

use super::*;
use crate::ast::Stmt;

#[test]
fn test_duplicate_variable_in_same_scope() {
    let kinds = error_kinds("program p; var x : integer; x : boolean; begin end.");
    assert_eq!(kinds, vec![SemanticErrorKind::Redefinition]);
}

#[test]
fn test_duplicate_subroutine_name() {
    let kinds = error_kinds(
        "program p; \
         procedure q; begin end; \
         procedure q; begin end; \
         begin end.",
    );
    assert_eq!(kinds, vec![SemanticErrorKind::Redefinition]);
}

#[test]
fn test_subroutine_name_colliding_with_variable() {
    let kinds = error_kinds(
        "program p; var q : integer; procedure q; begin end; begin end.",
    );
    assert_eq!(kinds, vec![SemanticErrorKind::Redefinition]);
}

#[test]
fn test_duplicate_parameter_name() {
    let kinds = error_kinds(
        "program p; procedure q(a : integer; a : boolean); begin end; begin end.",
    );
    assert_eq!(kinds, vec![SemanticErrorKind::Redefinition]);
}

#[test]
fn test_undeclared_variable() {
    let kinds = error_kinds("program p; begin x := 1 end.");
    assert_eq!(kinds, vec![SemanticErrorKind::Undeclared]);
}

#[test]
fn test_same_name_in_nested_scope_shadows_outer() {
    // Outer x is integer, inner x is boolean; the inner body must see
    // the boolean one.
    let (_, _) = analyze_ok(
        "program p; var x : integer; \
         procedure q; var x : boolean; begin x := true end; \
         begin x := 1 end.",
    );
}

#[test]
fn test_outer_variable_resolves_from_nested_body() {
    let (program, symbols) = analyze_ok(
        "program p; var x : integer; \
         procedure q; begin x := 1 end; \
         begin q() end.",
    );
    // The assignment inside q binds to the level-0 x.
    let proc = as_procedure(&program.block.sub_decls[0]);
    let Stmt::Assign(assign) = &proc.block.body.statements[0] else {
        panic!("Expected an assignment");
    };
    let entry = symbols.get(assign.target.entry.expect("target not bound"));
    assert_eq!(entry.level, 0);
    assert_eq!(entry.offset, 0);
}

#[test]
fn test_sibling_scopes_are_isolated() {
    // Both procedures declare v; the entries must be distinct.
    let (program, _) = analyze_ok(
        "program p; \
         procedure a; var v : integer; begin v := 1 end; \
         procedure b; var v : integer; begin v := 2 end; \
         begin a(); b() end.",
    );
    let first = as_procedure(&program.block.sub_decls[0]).block.var_decls[0].names[0]
        .entry
        .expect("v not bound in a");
    let second = as_procedure(&program.block.sub_decls[1]).block.var_decls[0].names[0]
        .entry
        .expect("v not bound in b");
    assert_ne!(first, second);
}

#[test]
fn test_sibling_local_does_not_resolve_across() {
    let kinds = error_kinds(
        "program p; \
         procedure a; var v : integer; begin v := 1 end; \
         procedure b; begin v := 2 end; \
         begin a(); b() end.",
    );
    assert_eq!(kinds, vec![SemanticErrorKind::Undeclared]);
}

#[test]
fn test_sibling_subroutines_see_each_other() {
    // Every subroutine name in a block is declared before any body is
    // walked, so an earlier sibling can call a later one.
    analyze_ok(
        "program p; \
         procedure first; begin second() end; \
         procedure second; begin end; \
         begin first() end.",
    );
}

#[test]
fn test_nested_subroutine_levels() {
    let (program, symbols) = analyze_ok(
        "program p; \
         procedure outer; \
           procedure inner; begin end; \
         begin inner() end; \
         begin outer() end.",
    );
    let outer_entry = subroutine_entry(&program, &symbols, 0);
    assert_eq!(outer_entry.level, 1);

    let outer = as_procedure(&program.block.sub_decls[0]);
    let inner_id = outer.block.sub_decls[0].entry().expect("inner not bound");
    assert_eq!(symbols.get(inner_id).level, 2);
}

#[test]
fn test_program_name_is_defined() {
    let (_, symbols) = analyze_ok("program p; begin end.");
    let entry = entry_named(&symbols, "p");
    assert_eq!(entry.category, Category::Program);
    assert_eq!(entry.ty, None);
}

#[test]
fn test_every_reference_is_bound_after_success() {
    let (program, _) = analyze_ok(
        "program p; var x : integer; begin x := 1; read(x); write(x) end.",
    );
    let statements = &program.block.body.statements;
    let Stmt::Assign(assign) = &statements[0] else {
        panic!("Expected an assignment");
    };
    assert!(assign.target.entry.is_some());
    let Stmt::Read(read) = &statements[1] else {
        panic!("Expected a read");
    };
    assert!(read.targets[0].entry.is_some());
}
