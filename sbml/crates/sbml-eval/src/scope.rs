//! The symbol table.
//!
//! `spec.md` §3 is explicit: "There is a single global scope; blocks
//! introduce no new scopes." Unlike the host's nested-rib scope tree (built
//! for Rust's `Module`/`Function`/`Block`/`Loop` lexical nesting), SBML
//! needs exactly one flat map from name to value, live for the duration of
//! one program run.

use indexmap::IndexMap;

use sbml_util::SbmlError;

use crate::value::{Name, Value};

/// A single, flat, process-wide binding table. `IndexMap` rather than
/// `std::collections::HashMap` for stable insertion-order iteration, which
/// keeps any future debug dump of the whole table deterministic without
/// changing lookup semantics.
#[derive(Default)]
pub struct SymbolTable {
    bindings: IndexMap<Name, Value>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads of undefined identifiers raise a semantic error (`spec.md` §3).
    pub fn get(&self, name: Name) -> Result<Value, SbmlError> {
        self.bindings.get(&name).cloned().ok_or(SbmlError::Semantic)
    }

    /// Assignments create or overwrite entries; there is no prior
    /// declaration requirement.
    pub fn set(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }
}
