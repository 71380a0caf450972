//! The two user-visible failure categories of an SBML program.
//!
//! Per the language specification there are exactly two fatal error kinds:
//! a malformed program is a syntax error, and a well-formed program that
//! violates an operator's type guard, references an unbound name, indexes
//! out of range, or divides/mods by zero is a semantic error. Both are
//! terminal — there is no recovery and no partial execution of statements
//! past the point of detection.

use thiserror::Error;

/// A fatal SBML interpreter error.
///
/// `Display` renders exactly the fixed, single-line text a user sees on
/// stdout (`SYNTAX ERROR` or `SEMANTIC ERROR`) — SBML reports no source
/// location or further detail for either category.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SbmlError {
    /// Raised by the lexer on an unrecognized character, or by the parser
    /// on any grammar rule violation (including an unexpected token or an
    /// unexpected end of input).
    #[error("SYNTAX ERROR")]
    Syntax,

    /// Raised by the evaluator for an operand type mismatch, an unbound
    /// identifier, an out-of-range index, a division/modulo by zero, or an
    /// indexed-assignment target that is not a List.
    #[error("SEMANTIC ERROR")]
    Semantic,
}

/// Result type alias used throughout the lexer, parser, and evaluator.
pub type SbmlResult<T> = std::result::Result<T, SbmlError>;
