//! Expression typing.
//!
//! `type_of` returns `Option<TypeName>`: `Some` for well-typed (or
//! error-recovered) expressions, `None` for expressions with no type at
//! all, such as a procedure name used as a value. Contexts treat `None`
//! as a mismatch, so one bad leaf surfaces wherever it is used without
//! the walk ever stopping.

use super::symbol::Category;
use super::{SemanticAnalyzer, SemanticError};

use crate::ast::{BinaryOp, Expr, ExprKind, FunctionCall, TypeName, UnaryOp, Var};
use crate::token::Span;

impl SemanticAnalyzer {
    pub(super) fn type_of(&mut self, expr: &mut Expr) -> Option<TypeName> {
        let span = expr.span;
        match &mut expr.kind {
            ExprKind::Number(_) => Some(TypeName::Integer),
            ExprKind::Boolean(_) => Some(TypeName::Boolean),
            ExprKind::Variable(var) => self.type_of_variable(var),
            ExprKind::Unary { op, operand } => {
                let ty = self.type_of(operand);
                match op {
                    UnaryOp::Not => {
                        if ty != Some(TypeName::Boolean) {
                            self.report(SemanticError::unary_operand(
                                "not",
                                TypeName::Boolean,
                                span,
                            ));
                        }
                        Some(TypeName::Boolean)
                    }
                    UnaryOp::Negate => {
                        if ty != Some(TypeName::Integer) {
                            self.report(SemanticError::unary_operand(
                                "-",
                                TypeName::Integer,
                                span,
                            ));
                        }
                        Some(TypeName::Integer)
                    }
                }
            }
            ExprKind::Binary { op, left, right } => {
                let op = *op;
                let left_ty = self.type_of(left);
                let right_ty = self.type_of(right);
                self.type_of_binary(op, left_ty, right_ty, span)
            }
            ExprKind::Call(call) => self.type_of_call(call, span),
        }
    }

    fn type_of_variable(&mut self, var: &mut Var) -> Option<TypeName> {
        let Some(id) = self.table.resolve(&var.name) else {
            self.report(SemanticError::undeclared(&var.name, var.span));
            return Some(TypeName::Integer);
        };

        let entry = self.table.get(id);
        let (category, ty) = (entry.category, entry.ty);
        if category == Category::Func {
            self.report(SemanticError::bare_function_use(&var.name, var.span));
            return ty;
        }
        var.entry = Some(id);
        // Variables and parameters are typed; the program name and
        // procedures yield no type and fail in the surrounding context.
        ty
    }

    fn type_of_binary(
        &mut self,
        op: BinaryOp,
        left: Option<TypeName>,
        right: Option<TypeName>,
        span: Span,
    ) -> Option<TypeName> {
        match op {
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
                if left != Some(TypeName::Integer) || right != Some(TypeName::Integer) {
                    self.report(SemanticError::operator_operands(
                        op,
                        TypeName::Integer,
                        left,
                        right,
                        span,
                    ));
                }
                Some(TypeName::Integer)
            }
            BinaryOp::And | BinaryOp::Or => {
                if left != Some(TypeName::Boolean) || right != Some(TypeName::Boolean) {
                    self.report(SemanticError::operator_operands(
                        op,
                        TypeName::Boolean,
                        left,
                        right,
                        span,
                    ));
                }
                Some(TypeName::Boolean)
            }
            BinaryOp::Equal | BinaryOp::NotEqual => {
                if left != right {
                    self.report(SemanticError::comparison_mixed(op, left, right, span));
                }
                Some(TypeName::Boolean)
            }
            BinaryOp::Less | BinaryOp::LessEqual | BinaryOp::Greater | BinaryOp::GreaterEqual => {
                if left != Some(TypeName::Integer) || right != Some(TypeName::Integer) {
                    self.report(SemanticError::operator_operands(
                        op,
                        TypeName::Integer,
                        left,
                        right,
                        span,
                    ));
                }
                Some(TypeName::Boolean)
            }
        }
    }

    fn type_of_call(&mut self, call: &mut FunctionCall, span: Span) -> Option<TypeName> {
        let Some(id) = self.table.resolve(&call.name) else {
            self.report(SemanticError::undeclared(&call.name, span));
            return Some(TypeName::Integer);
        };

        let entry = self.table.get(id);
        let (category, ty, param_types) = (entry.category, entry.ty, entry.params.clone());
        if category != Category::Func {
            self.report(match category {
                Category::Proc => SemanticError::procedure_in_expression(&call.name, span),
                _ => SemanticError::not_a_function(&call.name, category, span),
            });
            return Some(TypeName::Integer);
        }

        if call.args.len() != param_types.len() {
            self.report(SemanticError::argument_count(
                &call.name,
                param_types.len(),
                call.args.len(),
                span,
            ));
            return ty;
        }
        call.entry = Some(id);

        let name = call.name.clone();
        self.check_arguments(&name, &mut call.args, &param_types);
        ty
    }

    /// Checks argument types against the declared parameter types. The
    /// caller has already verified that the counts match.
    pub(super) fn check_arguments(
        &mut self,
        callee: &str,
        args: &mut [Expr],
        expected: &[TypeName],
    ) {
        for (index, (arg, &expected_ty)) in args.iter_mut().zip(expected).enumerate() {
            let span = arg.span;
            let found = self.type_of(arg);
            if found != Some(expected_ty) {
                self.report(SemanticError::argument_type(
                    index + 1,
                    callee,
                    expected_ty,
                    found,
                    span,
                ));
            }
        }
    }
}
