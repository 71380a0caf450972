//! sbml-util - foundation types shared by the SBML lexer, parser, and evaluator.
//!
//! This crate has no knowledge of SBML grammar or semantics. It provides:
//!
//! - [`symbol`]: string interning ([`symbol::Symbol`]) for O(1) identifier
//!   comparison in the evaluator's symbol table.
//! - [`span`]: byte-offset source locations ([`span::Span`]) and a
//!   [`span::SourceMap`] for turning an offset back into a line/column pair.
//! - [`error`]: the two fatal error categories an SBML program can raise.

pub mod error;
pub mod span;
pub mod symbol;

pub use error::{SbmlError, SbmlResult};
pub use span::{FileId, SourceFile, SourceMap, Span};
pub use symbol::Symbol;
