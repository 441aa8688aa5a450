//! Expression nodes for the minipas AST.

use crate::semantic::SymbolId;
use crate::token::Span;

use std::fmt;

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Integer addition `+`.
    Add,
    /// Integer subtraction `-`.
    Sub,
    /// Integer multiplication `*`.
    Mul,
    /// Integer division `div`.
    Div,
    /// Logical conjunction `and`.
    And,
    /// Logical disjunction `or`.
    Or,
    /// Equality `=`.
    Equal,
    /// Inequality `<>`.
    NotEqual,
    /// Strict less-than `<`.
    Less,
    /// Less-or-equal `<=`.
    LessEqual,
    /// Strict greater-than `>`.
    Greater,
    /// Greater-or-equal `>=`.
    GreaterEqual,
}

/// Displays the operator as it is spelled in source code.
impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spelling = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "div",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::Equal => "=",
            BinaryOp::NotEqual => "<>",
            BinaryOp::Less => "<",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEqual => ">=",
        };
        write!(f, "{}", spelling)
    }
}

/// A unary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Logical negation `not`.
    Not,
    /// Arithmetic negation (unary `-`).
    Negate,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Not => write!(f, "not"),
            UnaryOp::Negate => write!(f, "-"),
        }
    }
}

/// A named reference to a storage location.
///
/// `Var` appears as a declarator site in `var` sections and parameter lists,
/// as the target of assignments and `read`, and inside expressions via
/// [`ExprKind::Variable`]. The `entry` slot is `None` until the semantic
/// analyzer binds it to the resolved symbol.
#[derive(Debug, Clone)]
pub struct Var {
    /// The referenced name.
    pub name: String,
    /// The source location of the name.
    pub span: Span,
    /// The resolved symbol, bound during semantic analysis.
    pub entry: Option<SymbolId>,
}

impl Var {
    /// Creates an unbound reference to `name`.
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Var {
            name: name.into(),
            span,
            entry: None,
        }
    }
}

/// A function call in expression position.
///
/// The grammar cannot distinguish a function call from a procedure call;
/// call syntax in factor position always builds a `FunctionCall` and the
/// semantic analyzer validates the callee's category.
#[derive(Debug, Clone)]
pub struct FunctionCall {
    /// The name of the function being called.
    pub name: String,
    /// The arguments passed to the function.
    pub args: Vec<Expr>,
    /// The resolved callee, bound during semantic analysis.
    pub entry: Option<SymbolId>,
}

/// The kind of an expression.
///
/// This enum represents the different types of expressions without
/// source location information. Use [`Expr`] for the full AST node
/// with span information.
#[derive(Debug, Clone)]
pub enum ExprKind {
    /// A binary operation.
    Binary {
        /// The operator.
        op: BinaryOp,
        /// The left operand.
        left: Box<Expr>,
        /// The right operand.
        right: Box<Expr>,
    },

    /// A unary operation (`not` or unary minus).
    Unary {
        /// The operator.
        op: UnaryOp,
        /// The operand.
        operand: Box<Expr>,
    },

    /// A variable reference.
    Variable(Var),

    /// An integer literal.
    Number(i64),

    /// A boolean literal (`true` or `false`).
    Boolean(bool),

    /// A function call.
    Call(FunctionCall),
}

/// An expression with source location.
#[derive(Debug, Clone)]
pub struct Expr {
    /// The kind of expression.
    pub kind: ExprKind,
    /// The source location of this expression.
    pub span: Span,
}

impl Expr {
    /// Creates a new expression with the given kind and span.
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}
