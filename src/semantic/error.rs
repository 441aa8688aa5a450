//! Semantic analysis error types.
//!
//! This module defines [`SemanticError`], which represents errors that can
//! occur during semantic analysis (name resolution, category checks, type
//! checking), and [`SemanticErrorKind`] for structured matching.

use crate::ast::{BinaryOp, TypeName};
use crate::token::Span;

use super::symbol::Category;

/// The kind of semantic analysis error.
///
/// This enum allows error handling code and tests to match on error types
/// structurally rather than relying on message matching, which is fragile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticErrorKind {
    /// A name was declared twice in the same scope.
    Redefinition,
    /// A name does not resolve in any enclosing scope.
    Undeclared,
    /// An assignment target is not a variable or parameter.
    NotAssignable,
    /// An expression's type is incompatible with its context.
    TypeMismatch,
    /// A function name was referenced without an argument list.
    BareFunctionUse,
    /// A call site's argument count differs from the declaration.
    ArgumentCount,
    /// A procedure was called in expression position, a function was called
    /// as a statement, or a non-subroutine name was called.
    CallKind,
    /// A function body never assigns to its own name.
    MissingReturn,
    /// A `read` target is not a variable or parameter.
    ReadTarget,
    /// A `write` operand is not integer or boolean.
    WriteType,
}

/// An error that occurred during semantic analysis.
///
/// Contains a human-readable message and the source location of the
/// offending name or expression. The analyzer collects these instead of
/// stopping at the first, so one run can surface several problems.
#[derive(Debug)]
pub struct SemanticError {
    /// A human-readable description of the error.
    message: String,
    /// The source location of the offending name or expression.
    span: Span,
    /// The kind of error, for structured error handling.
    kind: SemanticErrorKind,
}

/// Describes a possibly-absent expression type in an error message.
///
/// An expression has no type when it names a procedure or the program
/// itself; the surrounding context reports that as a mismatch.
fn describe(ty: Option<TypeName>) -> String {
    match ty {
        Some(ty) => ty.to_string(),
        None => "no type".to_string(),
    }
}

impl SemanticError {
    fn new(kind: SemanticErrorKind, message: impl Into<String>, span: Span) -> Self {
        SemanticError {
            message: message.into(),
            span,
            kind,
        }
    }

    /// Creates a "name already declared" error.
    pub fn redefinition(name: &str, span: Span) -> Self {
        Self::new(
            SemanticErrorKind::Redefinition,
            format!("'{}' is already declared in this scope", name),
            span,
        )
    }

    /// Creates an "unknown name" error.
    pub fn undeclared(name: &str, span: Span) -> Self {
        Self::new(
            SemanticErrorKind::Undeclared,
            format!("'{}' is not declared", name),
            span,
        )
    }

    /// Creates an "assignment target is not storage" error.
    pub fn not_assignable(name: &str, category: Category, span: Span) -> Self {
        Self::new(
            SemanticErrorKind::NotAssignable,
            format!("cannot assign to '{}' ({})", name, category),
            span,
        )
    }

    /// Creates an assignment type mismatch error.
    pub fn assignment_type(
        name: &str,
        expected: Option<TypeName>,
        found: Option<TypeName>,
        span: Span,
    ) -> Self {
        Self::new(
            SemanticErrorKind::TypeMismatch,
            format!(
                "assignment to '{}' expects {}, found {}",
                name,
                describe(expected),
                describe(found)
            ),
            span,
        )
    }

    /// Creates a binary operator operand type error.
    pub fn operator_operands(
        op: BinaryOp,
        required: TypeName,
        left: Option<TypeName>,
        right: Option<TypeName>,
        span: Span,
    ) -> Self {
        Self::new(
            SemanticErrorKind::TypeMismatch,
            format!(
                "operator '{}' requires {} operands, found {} and {}",
                op,
                required,
                describe(left),
                describe(right)
            ),
            span,
        )
    }

    /// Creates a mixed-type comparison error for `=` and `<>`.
    pub fn comparison_mixed(
        op: BinaryOp,
        left: Option<TypeName>,
        right: Option<TypeName>,
        span: Span,
    ) -> Self {
        Self::new(
            SemanticErrorKind::TypeMismatch,
            format!(
                "comparison '{}' between different types: {} and {}",
                op,
                describe(left),
                describe(right)
            ),
            span,
        )
    }

    /// Creates a unary operator operand type error.
    pub fn unary_operand(op: &str, required: TypeName, span: Span) -> Self {
        Self::new(
            SemanticErrorKind::TypeMismatch,
            format!("'{}' requires a {} operand", op, required),
            span,
        )
    }

    /// Creates a non-boolean `if`/`while` condition error.
    pub fn condition_not_boolean(construct: &str, span: Span) -> Self {
        Self::new(
            SemanticErrorKind::TypeMismatch,
            format!("'{}' condition must be boolean", construct),
            span,
        )
    }

    /// Creates an argument type mismatch error. `index` is 1-based.
    pub fn argument_type(
        index: usize,
        callee: &str,
        expected: TypeName,
        found: Option<TypeName>,
        span: Span,
    ) -> Self {
        Self::new(
            SemanticErrorKind::TypeMismatch,
            format!(
                "argument {} of '{}' expects {}, found {}",
                index,
                callee,
                expected,
                describe(found)
            ),
            span,
        )
    }

    /// Creates a "function used without argument list" error.
    pub fn bare_function_use(name: &str, span: Span) -> Self {
        Self::new(
            SemanticErrorKind::BareFunctionUse,
            format!("function '{}' must be called with an argument list", name),
            span,
        )
    }

    /// Creates an argument count mismatch error.
    pub fn argument_count(name: &str, expected: usize, found: usize, span: Span) -> Self {
        Self::new(
            SemanticErrorKind::ArgumentCount,
            format!(
                "'{}' expects {} argument(s), received {}",
                name, expected, found
            ),
            span,
        )
    }

    /// Creates a "function called in statement position" error.
    pub fn function_as_statement(name: &str, span: Span) -> Self {
        Self::new(
            SemanticErrorKind::CallKind,
            format!("function '{}' cannot be called as a statement", name),
            span,
        )
    }

    /// Creates a "procedure called in expression position" error.
    pub fn procedure_in_expression(name: &str, span: Span) -> Self {
        Self::new(
            SemanticErrorKind::CallKind,
            format!("procedure '{}' cannot be used in an expression", name),
            span,
        )
    }

    /// Creates a "called name is not a procedure" error.
    pub fn not_a_procedure(name: &str, category: Category, span: Span) -> Self {
        Self::new(
            SemanticErrorKind::CallKind,
            format!("'{}' is a {}, not a procedure", name, category),
            span,
        )
    }

    /// Creates a "called name is not a function" error.
    pub fn not_a_function(name: &str, category: Category, span: Span) -> Self {
        Self::new(
            SemanticErrorKind::CallKind,
            format!("'{}' is a {}, not a function", name, category),
            span,
        )
    }

    /// Creates a "function never assigns its return value" error.
    pub fn missing_return(name: &str, span: Span) -> Self {
        Self::new(
            SemanticErrorKind::MissingReturn,
            format!("function '{}' never assigns its return value", name),
            span,
        )
    }

    /// Creates a "read target is not storage" error.
    pub fn read_target(name: &str, category: Category, span: Span) -> Self {
        Self::new(
            SemanticErrorKind::ReadTarget,
            format!("read expects a variable, found '{}' ({})", name, category),
            span,
        )
    }

    /// Creates a "write operand has no printable type" error.
    pub fn write_type(found: Option<TypeName>, span: Span) -> Self {
        Self::new(
            SemanticErrorKind::WriteType,
            format!(
                "write operand must be integer or boolean, found {}",
                describe(found)
            ),
            span,
        )
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
    pub fn kind(&self) -> SemanticErrorKind {
        self.kind
    }
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at line {}", self.message, self.span.line)
    }
}

impl std::error::Error for SemanticError {}
