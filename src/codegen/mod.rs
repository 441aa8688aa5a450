//! MEPA code generation for the minipas compiler.
//!
//! This module provides the [`CodeGen`] struct which walks the annotated
//! AST and emits MEPA stack-machine assembly into an ordered text buffer.
//!
//! # Overview
//!
//! The generator performs a single walk over the tree. It never consults
//! scopes: every variable reference and call site was stamped with a
//! symbol handle by the semantic analyzer, and the `(level, offset)` pairs
//! and subroutine labels it needs are read straight off those entries.
//!
//! Two line shapes are emitted:
//!
//! ```text
//! R00: NADA            label definition
//!      AMEM 1          instruction, five-space prefix, comma-joined operands
//! ```
//!
//! Control-flow labels come from a per-compilation counter formatted
//! `R%02d`; subroutine labels were assigned by the semantic analyzer and
//! are unique program-wide, so the two families never collide.
//!
//! # Calling convention
//!
//! Arguments are pushed in reverse source order so that the callee's
//! frame addresses them in source order at their negative offsets. A
//! function call first reserves one stack slot (`AMEM 1`); the callee
//! stores its result there through the hidden return slot, and after the
//! call that slot is the top of stack from the caller's perspective.
//!
//! # Module Structure
//!
//! - [`error`] - Internal error types (missing annotations)
//! - `stmt` - Statement emission
//! - `expr` - Expression emission
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::ast`] - The annotated tree consumed by this module
//! * [`crate::semantic`] - Produces the annotations this module reads

mod error;
mod expr;
mod stmt;


pub use error::CodegenError;

use crate::ast::{Block, Program, SubroutineDecl};
use crate::semantic::{SymbolEntry, SymbolId, Symbols};
use std::fmt::Display;

/// MEPA code generator.
///
/// Holds the emission buffer, the control-flow label counter, and the
/// static level of the code currently being emitted (0 for the program
/// body). Create one per compilation with [`CodeGen::new`] and consume it
/// with [`CodeGen::generate`].
pub struct CodeGen<'a> {
    /// The symbol arena produced by semantic analysis.
    symbols: &'a Symbols,
    /// Emitted lines, in order.
    code: Vec<String>,
    /// Counter behind `R%02d` control-flow labels.
    next_label: usize,
    /// Static nesting level of the code being emitted.
    current_level: usize,
}

impl<'a> CodeGen<'a> {
    /// Creates a code generator reading from `symbols`.
    pub fn new(symbols: &'a Symbols) -> Self {
        CodeGen {
            symbols,
            code: Vec::new(),
            next_label: 0,
            current_level: 0,
        }
    }

    /// Generates the complete MEPA text for `program`.
    ///
    /// The result is the emitted lines joined by single newlines, with no
    /// trailing newline.
    ///
    /// # Errors
    ///
    /// Returns a [`CodegenError`] only if the AST reached emission without
    /// being fully annotated, which the pipeline driver rules out.
    pub fn generate(mut self, program: &Program) -> Result<String, CodegenError> {
        self.emit("INPP");
        self.gen_block(&program.block)?;
        self.emit("PARA");
        self.emit("FIM");
        Ok(self.code.join("\n"))
    }

    /// Emits a block: local allocation, subroutine bodies behind a skip
    /// jump, the compound body, and local deallocation.
    fn gen_block(&mut self, block: &Block) -> Result<(), CodegenError> {
        let local_count: usize = block.var_decls.iter().map(|decl| decl.names.len()).sum();
        if local_count > 0 {
            self.emit1("AMEM", local_count);
        }

        // Subroutine code sits inline before the block body; jump over it
        // so it only runs when called.
        if !block.sub_decls.is_empty() {
            let after_subs = self.new_label();
            self.emit1("DSVS", &after_subs);
            for sub in &block.sub_decls {
                self.gen_subroutine(sub)?;
            }
            self.emit_label(&after_subs);
        }

        self.gen_compound(&block.body)?;

        if local_count > 0 {
            self.emit1("DMEM", local_count);
        }
        Ok(())
    }

    fn gen_subroutine(&mut self, sub: &SubroutineDecl) -> Result<(), CodegenError> {
        let entry = self.entry(sub.entry(), sub.name())?;
        let level = entry.level;
        let label = entry
            .label
            .clone()
            .ok_or_else(|| CodegenError::missing_label(sub.name()))?;

        self.emit_label(&label);
        self.emit1("ENPR", level);

        let saved_level = self.current_level;
        self.current_level = level;
        let block = match sub {
            SubroutineDecl::Procedure(decl) => &decl.block,
            SubroutineDecl::Function(decl) => &decl.block,
        };
        self.gen_block(block)?;
        self.current_level = saved_level;

        self.emit1("RTPR", sub.param_slots());
        Ok(())
    }

    /// Resolves a node's symbol annotation.
    fn entry(&self, id: Option<SymbolId>, name: &str) -> Result<&'a SymbolEntry, CodegenError> {
        match id {
            Some(id) => Ok(self.symbols.get(id)),
            None => Err(CodegenError::unbound(name)),
        }
    }

    /// Allocates a fresh control-flow label.
    fn new_label(&mut self) -> String {
        let label = format!("R{:02}", self.next_label);
        self.next_label += 1;
        label
    }

    /// Emits an instruction with no operands.
    fn emit(&mut self, mnemonic: &str) {
        self.code.push(format!("     {}", mnemonic));
    }

    /// Emits an instruction with one operand.
    fn emit1(&mut self, mnemonic: &str, operand: impl Display) {
        self.code.push(format!("     {} {}", mnemonic, operand));
    }

    /// Emits an instruction with two comma-joined operands.
    fn emit2(&mut self, mnemonic: &str, first: impl Display, second: impl Display) {
        self.code
            .push(format!("     {} {},{}", mnemonic, first, second));
    }

    /// Emits a label definition line.
    fn emit_label(&mut self, label: &str) {
        self.code.push(format!("{}: NADA", label));
    }
}
