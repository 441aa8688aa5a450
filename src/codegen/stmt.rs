//! Statement emission.

use super::{CodeGen, CodegenError};
use crate::ast::{
    Assignment, CompoundStatement, IfStmt, ProcedureCall, ReadStmt, Stmt, WhileStmt, WriteStmt,
};

impl CodeGen<'_> {
    pub(super) fn gen_compound(
        &mut self,
        compound: &CompoundStatement,
    ) -> Result<(), CodegenError> {
        for stmt in &compound.statements {
            self.gen_stmt(stmt)?;
        }
        Ok(())
    }

    fn gen_stmt(&mut self, stmt: &Stmt) -> Result<(), CodegenError> {
        match stmt {
            Stmt::Assign(assign) => self.gen_assignment(assign),
            Stmt::If(if_stmt) => self.gen_if(if_stmt),
            Stmt::While(while_stmt) => self.gen_while(while_stmt),
            Stmt::Call(call) => self.gen_call(call),
            Stmt::Read(read) => self.gen_read(read),
            Stmt::Write(write) => self.gen_write(write),
            Stmt::Compound(compound) => self.gen_compound(compound),
            Stmt::Empty => Ok(()),
        }
    }

    fn gen_assignment(&mut self, assign: &Assignment) -> Result<(), CodegenError> {
        self.gen_expr(&assign.value)?;
        let entry = self.entry(assign.target.entry, &assign.target.name)?;
        let (level, offset) = (entry.level, entry.offset);
        self.emit2("ARMZ", level, offset);
        Ok(())
    }

    fn gen_if(&mut self, if_stmt: &IfStmt) -> Result<(), CodegenError> {
        match &if_stmt.else_branch {
            Some(else_branch) => {
                let end_label = self.new_label();
                let else_label = self.new_label();

                self.gen_expr(&if_stmt.condition)?;
                self.emit1("DSVF", &else_label);
                self.gen_stmt(&if_stmt.then_branch)?;
                self.emit1("DSVS", &end_label);
                self.emit_label(&else_label);
                self.gen_stmt(else_branch)?;
                self.emit_label(&end_label);
            }
            None => {
                let end_label = self.new_label();

                self.gen_expr(&if_stmt.condition)?;
                self.emit1("DSVF", &end_label);
                self.gen_stmt(&if_stmt.then_branch)?;
                self.emit_label(&end_label);
            }
        }
        Ok(())
    }

    fn gen_while(&mut self, while_stmt: &WhileStmt) -> Result<(), CodegenError> {
        let start_label = self.new_label();
        let end_label = self.new_label();

        self.emit_label(&start_label);
        self.gen_expr(&while_stmt.condition)?;
        self.emit1("DSVF", &end_label);
        self.gen_stmt(&while_stmt.body)?;
        self.emit1("DSVS", &start_label);
        self.emit_label(&end_label);
        Ok(())
    }

    fn gen_call(&mut self, call: &ProcedureCall) -> Result<(), CodegenError> {
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

    fn gen_read(&mut self, read: &ReadStmt) -> Result<(), CodegenError> {
        for target in &read.targets {
            self.emit("LEIT");
            let entry = self.entry(target.entry, &target.name)?;
            let (level, offset) = (entry.level, entry.offset);
            self.emit2("ARMZ", level, offset);
        }
        Ok(())
    }

    fn gen_write(&mut self, write: &WriteStmt) -> Result<(), CodegenError> {
        for value in &write.values {
            self.gen_expr(value)?;
            self.emit("IMPR");
        }
        Ok(())
    }
}
