//! Statement checking: assignment targets, conditions, call categories,
//! and the `read`/`write` rules.

use super::symbol::Category;
use super::{SemanticAnalyzer, SemanticError};

use crate::ast::{
    Assignment, CompoundStatement, IfStmt, ProcedureCall, ReadStmt, Stmt, TypeName, WhileStmt,
    WriteStmt,
};

impl SemanticAnalyzer {
    pub(super) fn visit_compound(&mut self, compound: &mut CompoundStatement) {
        for stmt in &mut compound.statements {
            self.visit_stmt(stmt);
        }
    }

    fn visit_stmt(&mut self, stmt: &mut Stmt) {
        match stmt {
            Stmt::Assign(assign) => self.visit_assignment(assign),
            Stmt::If(if_stmt) => self.visit_if(if_stmt),
            Stmt::While(while_stmt) => self.visit_while(while_stmt),
            Stmt::Call(call) => self.visit_call_stmt(call),
            Stmt::Read(read) => self.visit_read(read),
            Stmt::Write(write) => self.visit_write(write),
            Stmt::Compound(compound) => self.visit_compound(compound),
            Stmt::Empty => {}
        }
    }

    fn visit_assignment(&mut self, assign: &mut Assignment) {
        // An assignment to the enclosing function's own name targets the
        // hidden return slot and satisfies the return requirement.
        let lookup_name =
            if self.current_function.as_deref() == Some(assign.target.name.as_str()) {
                self.return_assigned = true;
                format!("@{}", assign.target.name)
            } else {
                assign.target.name.clone()
            };

        let Some(id) = self.table.resolve(&lookup_name) else {
            self.report(SemanticError::undeclared(
                &assign.target.name,
                assign.target.span,
            ));
            return;
        };

        let entry = self.table.get(id);
        let (category, declared_ty) = (entry.category, entry.ty);
        if !matches!(category, Category::Var | Category::Param) {
            self.report(SemanticError::not_assignable(
                &assign.target.name,
                category,
                assign.target.span,
            ));
            return;
        }
        assign.target.entry = Some(id);

        let value_ty = self.type_of(&mut assign.value);
        if value_ty != declared_ty {
            self.report(SemanticError::assignment_type(
                &assign.target.name,
                declared_ty,
                value_ty,
                assign.target.span,
            ));
        }
    }

    fn visit_if(&mut self, if_stmt: &mut IfStmt) {
        let span = if_stmt.condition.span;
        let ty = self.type_of(&mut if_stmt.condition);
        if ty != Some(TypeName::Boolean) {
            self.report(SemanticError::condition_not_boolean("if", span));
        }
        self.visit_stmt(&mut if_stmt.then_branch);
        if let Some(else_branch) = &mut if_stmt.else_branch {
            self.visit_stmt(else_branch);
        }
    }

    fn visit_while(&mut self, while_stmt: &mut WhileStmt) {
        let span = while_stmt.condition.span;
        let ty = self.type_of(&mut while_stmt.condition);
        if ty != Some(TypeName::Boolean) {
            self.report(SemanticError::condition_not_boolean("while", span));
        }
        self.visit_stmt(&mut while_stmt.body);
    }

    fn visit_call_stmt(&mut self, call: &mut ProcedureCall) {
        let Some(id) = self.table.resolve(&call.name) else {
            self.report(SemanticError::undeclared(&call.name, call.span));
            return;
        };

        let entry = self.table.get(id);
        let (category, param_types) = (entry.category, entry.params.clone());
        if category != Category::Proc {
            self.report(match category {
                Category::Func => SemanticError::function_as_statement(&call.name, call.span),
                _ => SemanticError::not_a_procedure(&call.name, category, call.span),
            });
            return;
        }

        if call.args.len() != param_types.len() {
            self.report(SemanticError::argument_count(
                &call.name,
                param_types.len(),
                call.args.len(),
                call.span,
            ));
            return;
        }
        call.entry = Some(id);

        let name = call.name.clone();
        self.check_arguments(&name, &mut call.args, &param_types);
    }

    fn visit_read(&mut self, read: &mut ReadStmt) {
        for target in &mut read.targets {
            match self.table.resolve(&target.name) {
                None => self.report(SemanticError::undeclared(&target.name, target.span)),
                Some(id) => {
                    let category = self.table.get(id).category;
                    if !matches!(category, Category::Var | Category::Param) {
                        self.report(SemanticError::read_target(
                            &target.name,
                            category,
                            target.span,
                        ));
                    }
                    target.entry = Some(id);
                }
            }
        }
    }

    fn visit_write(&mut self, write: &mut WriteStmt) {
        for value in &mut write.values {
            let span = value.span;
            let ty = self.type_of(value);
            if !matches!(ty, Some(TypeName::Integer) | Some(TypeName::Boolean)) {
                self.report(SemanticError::write_type(ty, span));
            }
        }
    }
}
