//! Abstract Syntax Tree definitions for the minipas compiler.
//!
//! This module defines the data structures that represent parsed programs.
//! The AST is produced by the [`crate::parser`], annotated in place by the
//! [`crate::semantic`] analyzer (which fills the `entry` slots with resolved
//! symbol handles), and read by the [`crate::codegen`] emitter.
//!
//! # Structure
//!
//! - [`Program`] - The root node: program name plus the outermost [`Block`]
//! - [`Block`] - Variable declarations, subroutine declarations, and a body
//! - [`SubroutineDecl`] - A [`ProcedureDecl`] or [`FunctionDecl`]
//! - [`Stmt`] - Statements, including the empty statement
//! - [`Expr`] - Expressions; [`Var`] and [`FunctionCall`] carry `entry` slots
//! - [`TypeName`] - The two primitive types
//!
//! # Module Structure
//!
//! - [`types`] - Type names (integer, boolean)
//! - [`expr`] - Expression nodes and operators
//! - [`stmt`] - Statement nodes
//! - [`program`] - Program, block, and declaration structure
//! - [`pretty`] - Debug pretty-printer for the annotated tree
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::semantic`] - Annotates the AST with symbol bindings
//! * [`crate::codegen`] - Generates MEPA assembly from the annotated AST

mod expr;
pub mod pretty;
mod program;
mod stmt;
mod types;


pub use expr::{BinaryOp, Expr, ExprKind, FunctionCall, UnaryOp, Var};
pub use program::{Block, FunctionDecl, ProcedureDecl, Program, SubroutineDecl, VarDeclaration};
pub use stmt::{
    Assignment, CompoundStatement, IfStmt, ProcedureCall, ReadStmt, Stmt, WhileStmt, WriteStmt,
};
pub use types::TypeName;
