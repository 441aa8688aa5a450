//! Debug pretty-printer for the annotated AST.
//!
//! Renders the tree one node per line with two-space indentation. After
//! semantic analysis the printer also shows, for every bound reference,
//! the `(level,offset)` pair the code generator will address it with.
//! The driver prints this when the `-pp` flag is given.

use crate::semantic::{Symbols, SymbolId};

use super::expr::{Expr, ExprKind, Var};
use super::program::{Block, Program, SubroutineDecl, VarDeclaration};
use super::stmt::{CompoundStatement, Stmt};

/// Renders `program` as an indented tree.
pub fn render(program: &Program, symbols: &Symbols) -> String {
    let mut printer = Printer {
        symbols,
        out: String::new(),
        depth: 0,
    };
    printer.program(program);
    printer.out
}

struct Printer<'a> {
    symbols: &'a Symbols,
    out: String,
    depth: usize,
}

impl Printer<'_> {
    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn nested(&mut self, text: &str, body: impl FnOnce(&mut Self)) {
        self.line(text);
        self.depth += 1;
        body(self);
        self.depth -= 1;
    }

    fn binding(&self, entry: Option<SymbolId>) -> String {
        match entry {
            Some(id) => {
                let entry = self.symbols.get(id);
                format!(" ({},{})", entry.level, entry.offset)
            }
            None => String::new(),
        }
    }

    fn program(&mut self, program: &Program) {
        let header = format!("Program '{}'", program.name);
        self.nested(&header, |p| p.block(&program.block));
    }

    fn block(&mut self, block: &Block) {
        self.nested("Block", |p| {
            for decl in &block.var_decls {
                p.var_declaration(decl, "Var");
            }
            for sub in &block.sub_decls {
                p.subroutine(sub);
            }
            p.compound(&block.body);
        });
    }

    fn var_declaration(&mut self, decl: &VarDeclaration, role: &str) {
        for var in &decl.names {
            let binding = self.binding(var.entry);
            self.line(&format!("{} '{}' : {}{}", role, var.name, decl.ty, binding));
        }
    }

    fn subroutine(&mut self, sub: &SubroutineDecl) {
        let header = match sub {
            SubroutineDecl::Procedure(decl) => format!("Procedure '{}'", decl.name),
            SubroutineDecl::Function(decl) => {
                format!("Function '{}' : {}", decl.name, decl.return_type)
            }
        };
        self.nested(&header, |p| {
            for group in sub.params() {
                p.var_declaration(group, "Param");
            }
            match sub {
                SubroutineDecl::Procedure(decl) => p.block(&decl.block),
                SubroutineDecl::Function(decl) => p.block(&decl.block),
            }
        });
    }

    fn compound(&mut self, compound: &CompoundStatement) {
        self.nested("Begin", |p| {
            for stmt in &compound.statements {
                p.stmt(stmt);
            }
        });
    }

    fn stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Assign(assign) => {
                let header = format!(
                    "Assign '{}'{}",
                    assign.target.name,
                    self.binding(assign.target.entry)
                );
                self.nested(&header, |p| p.expr(&assign.value));
            }
            Stmt::If(if_stmt) => {
                self.nested("If", |p| {
                    p.expr(&if_stmt.condition);
                    p.nested("Then", |p| p.stmt(&if_stmt.then_branch));
                    if let Some(else_branch) = &if_stmt.else_branch {
                        p.nested("Else", |p| p.stmt(else_branch));
                    }
                });
            }
            Stmt::While(while_stmt) => {
                self.nested("While", |p| {
                    p.expr(&while_stmt.condition);
                    p.nested("Do", |p| p.stmt(&while_stmt.body));
                });
            }
            Stmt::Call(call) => {
                let header = format!("Call '{}'", call.name);
                self.nested(&header, |p| {
                    for arg in &call.args {
                        p.expr(arg);
                    }
                });
            }
            Stmt::Read(read) => {
                self.nested("Read", |p| {
                    for target in &read.targets {
                        p.var(target);
                    }
                });
            }
            Stmt::Write(write) => {
                self.nested("Write", |p| {
                    for value in &write.values {
                        p.expr(value);
                    }
                });
            }
            Stmt::Compound(compound) => self.compound(compound),
            Stmt::Empty => self.line("Empty"),
        }
    }

    fn var(&mut self, var: &Var) {
        let binding = self.binding(var.entry);
        self.line(&format!("Var '{}'{}", var.name, binding));
    }

    fn expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Binary { op, left, right } => {
                let header = format!("BinaryOp '{}'", op);
                self.nested(&header, |p| {
                    p.expr(left);
                    p.expr(right);
                });
            }
            ExprKind::Unary { op, operand } => {
                let header = format!("UnaryOp '{}'", op);
                self.nested(&header, |p| p.expr(operand));
            }
            ExprKind::Variable(var) => self.var(var),
            ExprKind::Number(value) => self.line(&format!("Number {}", value)),
            ExprKind::Boolean(value) => self.line(&format!("Boolean {}", value)),
            ExprKind::Call(call) => {
                let header = format!("FunctionCall '{}'", call.name);
                self.nested(&header, |p| {
                    for arg in &call.args {
                        p.expr(arg);
                    }
                });
            }
        }
    }
}
