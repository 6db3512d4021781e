//! The Transpiler module is in charge of taking a line of
//! JavaScript `var` declarations and producing the equivalent
//! Python assignments.
//!
//! It does this by implementing a pull-based tokenizer
//! and a single-token-lookahead recursive descent parser.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
