//! sbml-par - recursive-descent parser for SBML.
//!
//! Builds the AST ([`ast`]) from the token stream produced by `sbml-lex`.
//! The grammar has one production per precedence level; [`parser::Parser`]
//! mirrors that structure with one method per level. There is no error
//! recovery: the parser stops at the first rule violation.

pub mod ast;
pub mod parser;

pub use ast::{BinOp, Expr, Program, Stmt};
pub use parser::{parse, Parser};
