//! Type names for declarations and type checking.

use std::fmt;

/// A primitive type name in the source language.
///
/// The language has exactly two types. Subroutine entries and untyped
/// expressions (a procedure name used as a value) are represented as
/// `Option<TypeName>` where they occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeName {
    /// The `integer` type.
    Integer,
    /// The `boolean` type.
    Boolean,
}

/// Displays the type as it is spelled in source code.
///
/// This is used for generating user-facing error messages.
impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeName::Integer => write!(f, "integer"),
            TypeName::Boolean => write!(f, "boolean"),
        }
    }
}
