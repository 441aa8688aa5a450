//! Expression emission.
//!
//! Expressions compile to straight-line stack code: operands first, then
//! the operator's mnemonic, leaving the result on top of the stack.

use super::{CodeGen, CodegenError};
use crate::ast::{BinaryOp, Expr, ExprKind, UnaryOp};

/// Returns the MEPA mnemonic for a binary operator.
fn binary_mnemonic(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "SOMA",
        BinaryOp::Sub => "SUBT",
        BinaryOp::Mul => "MULT",
        BinaryOp::Div => "DIVI",
        BinaryOp::And => "CONJ",
        BinaryOp::Or => "DISJ",
        BinaryOp::Equal => "CMIG",
        BinaryOp::NotEqual => "CMDG",
        BinaryOp::Less => "CMME",
        BinaryOp::LessEqual => "CMEG",
        BinaryOp::Greater => "CMMA",
        BinaryOp::GreaterEqual => "CMAG",
    }
}

impl CodeGen<'_> {
    pub(super) fn gen_expr(&mut self, expr: &Expr) -> Result<(), CodegenError> {
        match &expr.kind {
            ExprKind::Number(value) => {
                self.emit1("CRCT", *value);
                Ok(())
            }
            ExprKind::Boolean(value) => {
                self.emit1("CRCT", if *value { 1 } else { 0 });
                Ok(())
            }
            ExprKind::Variable(var) => {
                let entry = self.entry(var.entry, &var.name)?;
                let (level, offset) = (entry.level, entry.offset);
                self.emit2("CRVL", level, offset);
                Ok(())
            }
            ExprKind::Unary { op, operand } => {
                self.gen_expr(operand)?;
                self.emit(match op {
                    UnaryOp::Not => "NEGA",
                    UnaryOp::Negate => "INVR",
                });
                Ok(())
            }
            ExprKind::Binary { op, left, right } => {
                self.gen_expr(left)?;
                self.gen_expr(right)?;
                self.emit(binary_mnemonic(*op));
                Ok(())
            }
            ExprKind::Call(call) => {
                // Reserve the return slot below the arguments; the callee
                // writes its result there and it survives the RTPR pop.
                self.emit1("AMEM", 1);
                for arg in call.args.iter().rev() {
                    self.gen_expr(arg)?;
                }
                let entry = self.entry(call.entry, &call.name)?;
                let label = entry
                    .label
                    .clone()
                    .ok_or_else(|| CodegenError::missing_label(&call.name))?;
                self.emit2("CHPR", label, self.current_level);
                Ok(())
            }
        }
    }
}
