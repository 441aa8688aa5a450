//! The minipas compiler library.
//!
//! minipas compiles a small Pascal-like language to MEPA, a textual
//! stack-machine assembly. This library provides the full static pipeline:
//! lexical analysis, parsing, semantic analysis with nested-scope symbol
//! resolution and type checking, and MEPA emission.
//!
//! # Modules
//!
//! - [`token`] - Token types and source location tracking
//! - [`lexer`] - Lexical analysis (tokenization)
//! - [`parser`] - Recursive descent parser
//! - [`ast`] - Abstract Syntax Tree definitions and the debug printer
//! - [`semantic`] - Symbol tables, layout, and type checking
//! - [`codegen`] - MEPA code generation
//!
//! # Example
//!
//! ```
//! let source = "program p; begin end.";
//! let mepa = minipas::compile(source).expect("compile error");
//!
//! assert_eq!(mepa, "     INPP\n     PARA\n     FIM");
//! ```
//!
//! Compilations are independent: [`compile`] keeps no state between calls,
//! so one process can run any number of them in any order.

pub mod ast;
pub mod codegen;
pub mod lexer;
pub mod parser;
pub mod semantic;
pub mod token;

use codegen::{CodeGen, CodegenError};
use lexer::{LexError, Lexer};
use parser::{ParseError, Parser};
use semantic::{SemanticAnalyzer, SemanticError};

/// A compilation failure, partitioned by the stage that flagged it.
///
/// The lexical and semantic stages collect every error they can find
/// before giving up; the parser stops at the first offending token.
#[derive(Debug)]
pub enum CompileError {
    /// Illegal characters or malformed literals, in source order.
    Lexical(Vec<LexError>),
    /// The first grammar violation.
    Syntactic(ParseError),
    /// Every semantic violation found, in source order.
    Semantic(Vec<SemanticError>),
    /// An annotation was missing at emission time. Indicates a pipeline
    /// bug, not a problem with the input.
    Internal(CodegenError),
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::Lexical(errors) => {
                write!(f, "{} lexical error(s)", errors.len())
            }
            CompileError::Syntactic(error) => write!(f, "{}", error),
            CompileError::Semantic(errors) => {
                write!(f, "{} semantic error(s)", errors.len())
            }
            CompileError::Internal(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for CompileError {}

/// Compiles minipas source text to MEPA assembly.
///
/// Runs the full pipeline and returns the emitted program: lines joined
/// by single newlines, no trailing newline. The driver binary wraps this
/// with file I/O and per-stage reporting; use the stage types directly
/// (see [`lexer::Lexer`], [`parser::Parser`], [`semantic::SemanticAnalyzer`],
/// [`codegen::CodeGen`]) when intermediate artifacts are needed.
///
/// # Errors
///
/// Returns the first failing stage's collected errors; later stages do
/// not run.
pub fn compile(source: &str) -> Result<String, CompileError> {
    let tokens = Lexer::new(source)
        .tokenize()
        .map_err(CompileError::Lexical)?;

    let mut program = Parser::new(tokens)
        .parse()
        .map_err(CompileError::Syntactic)?;

    let symbols = SemanticAnalyzer::new()
        .analyze(&mut program)
        .map_err(CompileError::Semantic)?;

    CodeGen::new(&symbols)
        .generate(&program)
        .map_err(CompileError::Internal)
}
