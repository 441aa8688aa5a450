//! Statement nodes for the minipas AST.

use crate::semantic::SymbolId;
use crate::token::Span;

use super::expr::{Expr, Var};

/// A statement.
///
/// The statement grammar accepts an empty production, so "no statement at
/// all" is itself a variant rather than an `Option` at every use site
/// (`begin ; end` contains two empty statements).
#[derive(Debug, Clone)]
pub enum Stmt {
    /// An assignment `target := expr`.
    Assign(Assignment),
    /// An `if` statement with optional `else` branch.
    If(IfStmt),
    /// A `while` loop.
    While(WhileStmt),
    /// A procedure call in statement position.
    Call(ProcedureCall),
    /// A `read(v, ...)` statement.
    Read(ReadStmt),
    /// A `write(e, ...)` statement.
    Write(WriteStmt),
    /// A nested `begin ... end` sequence.
    Compound(CompoundStatement),
    /// The empty statement.
    Empty,
}

/// An assignment statement.
///
/// When the target name equals the enclosing function's name, the semantic
/// analyzer rebinds the target to the function's hidden return slot.
#[derive(Debug, Clone)]
pub struct Assignment {
    /// The assigned variable.
    pub target: Var,
    /// The assigned value.
    pub value: Expr,
}

/// An `if` statement.
#[derive(Debug, Clone)]
pub struct IfStmt {
    /// The condition. Must type to `boolean`.
    pub condition: Expr,
    /// The statement executed when the condition is true.
    pub then_branch: Box<Stmt>,
    /// The statement executed when the condition is false, if any.
    pub else_branch: Option<Box<Stmt>>,
}

/// A `while` loop.
#[derive(Debug, Clone)]
pub struct WhileStmt {
    /// The loop condition. Must type to `boolean`.
    pub condition: Expr,
    /// The loop body.
    pub body: Box<Stmt>,
}

/// A procedure call in statement position.
///
/// Call syntax in statement position always builds a `ProcedureCall`; the
/// semantic analyzer validates that the callee really is a procedure.
#[derive(Debug, Clone)]
pub struct ProcedureCall {
    /// The name of the procedure being called.
    pub name: String,
    /// The arguments passed to the procedure.
    pub args: Vec<Expr>,
    /// The source location of the callee name.
    pub span: Span,
    /// The resolved callee, bound during semantic analysis.
    pub entry: Option<SymbolId>,
}

/// A `read` statement. Every target must resolve to a variable or parameter.
#[derive(Debug, Clone)]
pub struct ReadStmt {
    /// The variables receiving input, in source order.
    pub targets: Vec<Var>,
}

/// A `write` statement.
#[derive(Debug, Clone)]
pub struct WriteStmt {
    /// The written expressions, in source order.
    pub values: Vec<Expr>,
}

/// A `begin ... end` statement sequence.
#[derive(Debug, Clone)]
pub struct CompoundStatement {
    /// The statements in source order.
    pub statements: Vec<Stmt>,
}
