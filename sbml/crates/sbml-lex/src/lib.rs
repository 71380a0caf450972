//! sbml-lex - lexical analysis for SBML.
//!
//! Turns source text into a flat token stream ([`tokenize`]). The lexer is a
//! single left-to-right pass with no backtracking: each call to
//! [`Lexer::next_token`] skips leading whitespace/comments, then scans
//! exactly one token starting at the current position.
//!
//! SBML has no error recovery. The first unrecognized character, bare `:`,
//! unterminated string, or malformed number returns
//! [`sbml_util::SbmlError::Syntax`] immediately and tokenization stops.

pub mod cursor;
pub mod lexer;
pub mod token;

pub use lexer::{tokenize, Lexer, SpannedToken};
pub use token::Token;
