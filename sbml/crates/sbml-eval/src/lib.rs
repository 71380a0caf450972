//! sbml-eval - the tree-walking evaluator for SBML.
//!
//! Three modules, mirroring the shape of the host's semantic-analysis
//! crate it replaces:
//!
//! - [`scope`]: the symbol table — a single flat map, since SBML blocks
//!   introduce no new scopes.
//! - [`value`]: the `Value` tagged union and its canonical `Display` form.
//! - [`numeric`]: Int/Real promotion, the one place genuine type-inference-
//!   like reasoning happens.
//! - [`interp`]: the recursive tree-walk itself, applying the operator
//!   type-guard table from the language specification.

pub mod interp;
pub mod numeric;
pub mod scope;
pub mod value;

pub use interp::{eval_program, Interpreter};
pub use value::Value;
