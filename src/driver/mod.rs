//! Stage-by-stage compilation driver.
//!
//! Runs the pipeline one stage at a time so the CLI can report every
//! error a stage collected, print a stage-abort line, and stop before
//! the next stage runs. The library's one-shot [`minipas::compile`] wraps
//! the same stages for callers that do not need per-stage control.

use std::fs;

use minipas::ast::pretty;
use minipas::codegen::CodeGen;
use minipas::lexer::Lexer;
use minipas::parser::Parser;
use minipas::semantic::SemanticAnalyzer;

use crate::diagnostics;

/// Compiles `input` to `output`, reporting progress and errors on the
/// standard streams. Returns the process exit code.
///
/// Each failing stage prints its collected errors as labeled snippets,
/// then a single `<STAGE>: compilation aborted` line, and no output file
/// is written. On success a confirmation line naming the output path is
/// printed; with `print_ast` set, the annotated syntax tree goes to
/// stdout first.
pub(crate) fn run(input: &str, output: &str, print_ast: bool) -> i32 {
    let source = match fs::read_to_string(input) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("IO: cannot open input file '{}': {}", input, error);
            return 1;
        }
    };

    let tokens = match Lexer::new(&source).tokenize() {
        Ok(tokens) => tokens,
        Err(errors) => {
            for error in &errors {
                let message = format!("LEXICAL: {}", error);
                diagnostics::report(input, &source, &message, error.span());
            }
            eprintln!("LEXICAL: compilation aborted");
            return 1;
        }
    };

    let mut program = match Parser::new(tokens).parse() {
        Ok(program) => program,
        Err(error) => {
            let message = format!("SYNTACTIC: {}", error);
            diagnostics::report(input, &source, &message, error.span());
            eprintln!("SYNTACTIC: compilation aborted");
            return 1;
        }
    };

    let symbols = match SemanticAnalyzer::new().analyze(&mut program) {
        Ok(symbols) => symbols,
        Err(errors) => {
            for error in &errors {
                let message = format!("SEMANTIC: {}", error);
                diagnostics::report(input, &source, &message, error.span());
            }
            eprintln!("SEMANTIC: compilation aborted");
            return 1;
        }
    };

    if print_ast {
        print!("{}", pretty::render(&program, &symbols));
    }

    let mepa = match CodeGen::new(&symbols).generate(&program) {
        Ok(mepa) => mepa,
        Err(error) => {
            // Unreachable when the semantic stage succeeded; reported as
            // a compiler bug rather than a source error.
            eprintln!("SEMANTIC: {}", error);
            eprintln!("SEMANTIC: compilation aborted");
            return 1;
        }
    };

    match fs::write(output, mepa) {
        Ok(()) => {
            println!("Compiled '{}' to '{}'", input, output);
            0
        }
        Err(error) => {
            eprintln!("IO: cannot write output file '{}': {}", output, error);
            1
        }
    }
}
