//! Semantic analysis for the minipas compiler.
//!
//! This module provides the [`SemanticAnalyzer`], which walks the AST once,
//! builds nested symbol tables, and annotates the tree in place: every
//! variable reference, call site, and subroutine declaration ends up with a
//! [`SymbolId`] pointing into the [`Symbols`] arena (or the analyzer has
//! reported an error and the pipeline stops before code generation).
//!
//! # Responsibilities
//!
//! - **Name resolution**: declarations per scope, duplicate detection,
//!   outward lookup along the static nesting chain
//! - **Layout**: level and offset assignment for variables, the negative
//!   offsets of parameters, and the hidden function return slot
//! - **Labels**: each subroutine receives a program-unique code label
//! - **Type checking**: the language's two types across operators,
//!   assignments, conditions, `read`/`write`, and call arguments
//!
//! The analyzer reports and continues — one run collects every error it
//! can find, and the walk never unwinds early.
//!
//! # Pipeline Position
//!
//! ```text
//! Source → Lexer → Parser → Semantic Analyzer → Codegen → MEPA text
//! ```
//!
//! # Scoping discipline
//!
//! The program body is level 0. Entering a subroutine body pushes a scope
//! one level deeper; leaving it restores the parent. A subroutine's own
//! entry lives in the scope that declares it but carries the level of its
//! body, which is what `ENPR` and the activation-record addressing need.
//!
//! Within a block, declarations bind in a fixed order: first the `var`
//! sections, then every subroutine name (so sibling subroutines can call
//! each other regardless of source order), then subroutine bodies are
//! walked, and finally the compound body of the block itself.

mod error;
mod symbol;
mod typecheck_expr;
mod typecheck_stmt;


pub use error::{SemanticError, SemanticErrorKind};
pub use symbol::{Category, SymbolEntry, SymbolId, Symbols};
use symbol::SymbolTable;

use crate::ast::{
    Block, FunctionDecl, ProcedureDecl, Program, SubroutineDecl, TypeName, VarDeclaration,
};

/// Semantic analyzer for minipas programs.
///
/// Create one per compilation with [`SemanticAnalyzer::new`] and consume it
/// with [`SemanticAnalyzer::analyze`]. All state is per-instance, so two
/// compilations in one process never observe each other.
pub struct SemanticAnalyzer {
    table: SymbolTable,
    errors: Vec<SemanticError>,
    /// Name of the function whose body is being walked, for the
    /// assignment-to-function-name rewrite. Nested functions save and
    /// restore it; nested procedures deliberately do not.
    current_function: Option<String>,
    /// Whether the current function has assigned its return slot.
    return_assigned: bool,
    /// Program-wide counter for subroutine label generation.
    label_counter: usize,
}

impl SemanticAnalyzer {
    /// Creates a new semantic analyzer.
    pub fn new() -> Self {
        SemanticAnalyzer {
            table: SymbolTable::new(),
            errors: Vec::new(),
            current_function: None,
            return_assigned: false,
            label_counter: 0,
        }
    }

    /// Analyzes `program`, annotating its nodes in place.
    ///
    /// # Returns
    ///
    /// * `Ok(Symbols)` - The arena of resolved entries; every reachable
    ///   `entry` slot in the AST now holds a valid handle into it
    /// * `Err(Vec<SemanticError>)` - Every error found, in source order
    pub fn analyze(mut self, program: &mut Program) -> Result<Symbols, Vec<SemanticError>> {
        self.table.enter_scope();
        self.table
            .define(&program.name, None, Category::Program, None);
        self.visit_block(&mut program.block);
        self.table.exit_scope();

        if self.errors.is_empty() {
            Ok(self.table.into_symbols())
        } else {
            Err(self.errors)
        }
    }

    fn report(&mut self, error: SemanticError) {
        self.errors.push(error);
    }

    fn visit_block(&mut self, block: &mut Block) {
        // Variables first, then subroutine names, then subroutine bodies,
        // then the block body. Pre-declaring every subroutine before any
        // body lets later siblings call earlier ones and vice versa.
        for decl in &mut block.var_decls {
            self.define_variables(decl);
        }
        for sub in &mut block.sub_decls {
            self.declare_subroutine(sub);
        }
        for sub in &mut block.sub_decls {
            match sub {
                SubroutineDecl::Procedure(decl) => self.visit_procedure(decl),
                SubroutineDecl::Function(decl) => self.visit_function(decl),
            }
        }
        self.visit_compound(&mut block.body);
    }

    fn define_variables(&mut self, decl: &mut VarDeclaration) {
        let ty = decl.ty;
        for var in &mut decl.names {
            match self.table.define(&var.name, Some(ty), Category::Var, None) {
                Some(id) => var.entry = Some(id),
                None => self.report(SemanticError::redefinition(&var.name, var.span)),
            }
        }
    }

    /// Pre-declares a subroutine in the current scope: category, return
    /// type, the level of its future body, and a program-unique label.
    fn declare_subroutine(&mut self, sub: &mut SubroutineDecl) {
        let (name, span, category, ty) = match sub {
            SubroutineDecl::Procedure(decl) => (decl.name.clone(), decl.span, Category::Proc, None),
            SubroutineDecl::Function(decl) => (
                decl.name.clone(),
                decl.span,
                Category::Func,
                Some(decl.return_type),
            ),
        };

        match self.table.define(&name, ty, category, None) {
            Some(id) => {
                let body_level = self.table.current_level() + 1;
                let label = format!("R_{}_{}", name, self.label_counter);
                self.label_counter += 1;

                let entry = self.table.get_mut(id);
                entry.level = body_level;
                entry.label = Some(label);

                match sub {
                    SubroutineDecl::Procedure(decl) => decl.entry = Some(id),
                    SubroutineDecl::Function(decl) => decl.entry = Some(id),
                }
            }
            None => self.report(SemanticError::redefinition(&name, span)),
        }
    }

    fn visit_procedure(&mut self, decl: &mut ProcedureDecl) {
        self.table.enter_scope();

        let param_types = self.define_params(&mut decl.params);
        if let Some(id) = decl.entry {
            self.table.get_mut(id).params = param_types;
        }

        self.visit_block(&mut decl.block);

        self.table.exit_scope();
    }

    fn visit_function(&mut self, decl: &mut FunctionDecl) {
        self.table.enter_scope();

        let param_types = self.define_params(&mut decl.params);
        let total = param_types.len() as i32;
        if let Some(id) = decl.entry {
            self.table.get_mut(id).params = param_types;
        }

        // Hidden return slot, one slot below the left-most parameter.
        // `@` cannot appear in a source identifier, so the name is
        // collision-free; assignments to the function's own name are
        // rewritten to target it.
        let slot_name = format!("@{}", decl.name);
        self.table.define(
            &slot_name,
            Some(decl.return_type),
            Category::Var,
            Some(-5 - total),
        );

        let saved_function = self.current_function.replace(decl.name.clone());
        let saved_flag = std::mem::replace(&mut self.return_assigned, false);

        self.visit_block(&mut decl.block);

        if !self.return_assigned {
            self.report(SemanticError::missing_return(&decl.name, decl.span));
        }
        self.current_function = saved_function;
        self.return_assigned = saved_flag;

        self.table.exit_scope();
    }

    /// Defines every parameter declarator site, left to right.
    ///
    /// With T total slots, the parameter at 0-based position `i` sits at
    /// offset `-5 - (T - 1 - i)`: the left-most parameter is deepest below
    /// the frame bookkeeping slots and the right-most sits at `-5`. The
    /// caller pushes arguments in reverse source order, which makes the
    /// callee's frame address them in source order. Parameters are
    /// addressable slots but never advance the scope's variable counter.
    fn define_params(&mut self, params: &mut [VarDeclaration]) -> Vec<TypeName> {
        let total: usize = params.iter().map(|group| group.names.len()).sum();
        let mut types = Vec::with_capacity(total);

        let mut position = 0i32;
        for group in params.iter_mut() {
            let ty = group.ty;
            for var in &mut group.names {
                let offset = -5 - (total as i32 - 1 - position);
                match self
                    .table
                    .define(&var.name, Some(ty), Category::Param, Some(offset))
                {
                    Some(id) => var.entry = Some(id),
                    None => self.report(SemanticError::redefinition(&var.name, var.span)),
                }
                types.push(ty);
                position += 1;
            }
        }
        types
    }
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
