//! LOOP Parser Module
//!
//! Parses the token stream into an Abstract Syntax Tree (AST).

mod ast;
mod loop_parser;

pub use ast::{ArithOp, Natural, Program, Statement, VarId};
pub use loop_parser::{Parser, ParserConfig};

use std::io::Read;

use crate::error::Result;
use crate::lexer::Lexer;

/// Parses a complete program from source text with default limits
pub fn parse_str(source: &str) -> Result<Program> {
    Parser::new(Lexer::new(source)).parse()
}

/// Reads all of `reader` as UTF-8 and parses it with default limits
///
/// Read failures and invalid UTF-8 surface as `Error::Io`.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Program> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    parse_str(&source)
}
