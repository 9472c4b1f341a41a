//! Lexical analysis for LOOP programs
//!
//! Converts source text into a stream of tokens, one token at a time.

mod scanner;
mod token;

pub use scanner::Lexer;
pub use token::{Token, TokenKind};
