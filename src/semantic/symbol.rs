//! Symbol table for semantic analysis.
//!
//! This module provides the arena of [`SymbolEntry`] values ([`Symbols`]),
//! the opaque [`SymbolId`] handle stamped onto AST nodes, and the scoped
//! [`SymbolTable`] the analyzer uses while walking the tree.
//!
//! Entries live in a single vector for the whole compilation; scopes map
//! names to indices into it. AST nodes therefore carry plain copyable
//! handles rather than references, and the arena outlives the scope stack
//! so the code generator can keep reading entries after every scope has
//! been discarded.

use crate::ast::TypeName;
use std::collections::HashMap;
use std::fmt;

/// An opaque handle to a [`SymbolEntry`] in the [`Symbols`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolId(usize);

/// The category of a declared name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// The program name itself.
    Program,
    /// A declared variable, including the hidden function return slot.
    Var,
    /// A subroutine parameter.
    Param,
    /// A procedure.
    Proc,
    /// A function.
    Func,
}

/// Displays the category for use in error messages.
impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Category::Program => "program",
            Category::Var => "variable",
            Category::Param => "parameter",
            Category::Proc => "procedure",
            Category::Func => "function",
        };
        write!(f, "{}", word)
    }
}

/// Everything the compiler knows about one declared name.
#[derive(Debug, Clone)]
pub struct SymbolEntry {
    /// The declared name. The hidden function return slot is `@<funcname>`.
    pub name: String,
    /// The declared type. `None` for the program name and for procedures.
    pub ty: Option<TypeName>,
    /// The category of the declaration.
    pub category: Category,
    /// The static nesting level this entry is addressed at. For subroutine
    /// entries this is the level of their own body (defining level + 1).
    pub level: usize,
    /// The slot index within the activation record of `level`. Local
    /// variables count up from 0; parameters and the return slot sit at
    /// negative offsets below the frame bookkeeping slots.
    pub offset: i32,
    /// For subroutines, the parameter types in source order.
    pub params: Vec<TypeName>,
    /// For subroutines, the program-unique code label.
    pub label: Option<String>,
}

/// The arena of symbol entries produced by semantic analysis.
///
/// Owned by the analyzer during the walk and handed to the caller on
/// success; the code generator reads entries through the [`SymbolId`]
/// handles stamped onto the AST.
#[derive(Debug, Default)]
pub struct Symbols {
    entries: Vec<SymbolEntry>,
}

impl Symbols {
    /// Returns the entry behind a handle.
    pub fn get(&self, id: SymbolId) -> &SymbolEntry {
        &self.entries[id.0]
    }

    /// Iterates over every entry defined during analysis.
    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &SymbolEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (SymbolId(index), entry))
    }

    fn alloc(&mut self, entry: SymbolEntry) -> SymbolId {
        let id = SymbolId(self.entries.len());
        self.entries.push(entry);
        id
    }

    fn get_mut(&mut self, id: SymbolId) -> &mut SymbolEntry {
        &mut self.entries[id.0]
    }
}

/// One scope's name map plus its allocation state.
#[derive(Debug)]
struct Scope {
    names: HashMap<String, SymbolId>,
    level: usize,
    offset_counter: i32,
}

impl Scope {
    fn new(level: usize) -> Self {
        Scope {
            names: HashMap::new(),
            level,
            offset_counter: 0,
        }
    }
}

/// The scoped symbol table driven by the semantic analyzer.
///
/// Combines the entry arena with a stack of scopes. `define` inserts into
/// the innermost scope only; `resolve` searches outward through the stack.
#[derive(Debug, Default)]
pub(super) struct SymbolTable {
    arena: Symbols,
    scopes: Vec<Scope>,
}

impl SymbolTable {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Pushes a child scope. The first scope is level 0; each nested scope
    /// is one level deeper.
    pub(super) fn enter_scope(&mut self) {
        let level = self.scopes.len();
        self.scopes.push(Scope::new(level));
    }

    /// Pops the innermost scope, discarding its name map. The entries it
    /// allocated stay in the arena.
    pub(super) fn exit_scope(&mut self) {
        self.scopes.pop();
    }

    /// Returns the level of the innermost scope.
    pub(super) fn current_level(&self) -> usize {
        self.scopes.len().saturating_sub(1)
    }

    /// Defines `name` in the innermost scope.
    ///
    /// Without `force_offset`, the entry receives the scope's current
    /// offset counter, which advances only for `Category::Var`; parameters
    /// and the hidden return slot pass an explicit negative offset and
    /// leave the counter alone.
    ///
    /// Returns `None` when the name already exists in the innermost scope.
    pub(super) fn define(
        &mut self,
        name: &str,
        ty: Option<TypeName>,
        category: Category,
        force_offset: Option<i32>,
    ) -> Option<SymbolId> {
        let Some(scope) = self.scopes.last_mut() else {
            unreachable!("define called before enter_scope");
        };
        if scope.names.contains_key(name) {
            return None;
        }

        let offset = match force_offset {
            Some(offset) => offset,
            None => {
                let offset = scope.offset_counter;
                if category == Category::Var {
                    scope.offset_counter += 1;
                }
                offset
            }
        };

        let id = self.arena.alloc(SymbolEntry {
            name: name.to_string(),
            ty,
            category,
            level: scope.level,
            offset,
            params: Vec::new(),
            label: None,
        });
        scope.names.insert(name.to_string(), id);
        Some(id)
    }

    /// Resolves `name` in the innermost scope, then outward through the
    /// parent chain.
    pub(super) fn resolve(&self, name: &str) -> Option<SymbolId> {
        for scope in self.scopes.iter().rev() {
            if let Some(&id) = scope.names.get(name) {
                return Some(id);
            }
        }
        None
    }

    /// Returns the entry behind a handle.
    pub(super) fn get(&self, id: SymbolId) -> &SymbolEntry {
        self.arena.get(id)
    }

    /// Returns the entry behind a handle for in-place adjustment
    /// (subroutine level override, label and parameter-list assignment).
    pub(super) fn get_mut(&mut self, id: SymbolId) -> &mut SymbolEntry {
        self.arena.get_mut(id)
    }

    /// Consumes the table, keeping only the arena.
    pub(super) fn into_symbols(self) -> Symbols {
        self.arena
    }
}
