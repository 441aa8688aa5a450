//! Common test utilities for minipas integration tests.
//!
//! This module provides shared helper functions used across the
//! integration test files.

// Each test file is compiled as a separate crate, so not all functions
// are used in every test file. This is expected behavior.
#![allow(dead_code)]

use minipas::CompileError;

/// Compiles `source`, panicking on any failure.
pub fn compile_ok(source: &str) -> String {
    minipas::compile(source)
        .unwrap_or_else(|error| panic!("Compilation of {:?} failed: {}", source, error))
}

/// Compiles `source`, panicking unless it fails.
pub fn compile_err(source: &str) -> CompileError {
    match minipas::compile(source) {
        Ok(output) => panic!(
            "Expected compilation of {:?} to fail, got:\n{}",
            source, output
        ),
        Err(error) => error,
    }
}

/// Returns the path to the minipas binary built by cargo.
pub fn minipas_binary() -> String {
    env!("CARGO_BIN_EXE_minipas").to_string()
}
