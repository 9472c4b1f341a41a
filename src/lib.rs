//! # Loopi - an interpreter for the LOOP language
//!
//! LOOP is a minimal imperative language in which every program terminates.
//! It has exactly two statements:
//!
//! - `xi := xj + n` / `xi := xj - n` - assignment with a literal operand,
//!   where subtraction stops at zero
//! - `LOOP xi DO P END` - run `P` as many times as `xi` held on entry
//!
//! Statements are sequenced with `;`. Variables are named `x0`, `x1`, ... and
//! hold natural numbers. By convention `x1..xn` carry the inputs and `x0` the
//! result.
//!
//! ## Basic Usage
//!
//! ```rust
//! use loopi::{Evaluator, Lexer, Parser, VariableStore};
//!
//! # fn main() -> loopi::Result<()> {
//! // x0 := x1 * x2
//! let code = "LOOP x1 DO LOOP x2 DO x0 := x0 + 1 END END";
//!
//! let mut parser = Parser::new(Lexer::new(code));
//! let program = parser.parse()?;
//!
//! let mut evaluator = Evaluator::with_store(VariableStore::from_inputs(&[6, 7]));
//! evaluator.execute(&program)?;
//!
//! assert_eq!(evaluator.store().output(), 42);
//! # Ok(())
//! # }
//! ```
//!
//! Or in one step:
//!
//! ```rust
//! assert_eq!(loopi::run("x0 := x1 - 10", &[3]).unwrap(), 0);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source Code → Lexer → Tokens → Parser → AST → Evaluator → x0
//! ```
//!
//! - [`Lexer`] - Produces tokens on demand, with one token of pushback
//! - [`Parser`] - LL(1) recursive descent into a [`Program`]
//! - [`Evaluator`] - Walks the AST, updating a [`VariableStore`]
//!
//! ## Error Handling
//!
//! Every failure is an [`Error`] returned through [`Result`]; the first error
//! stops the run.
//!
//! ```rust
//! let err = loopi::parse_str("x1 = x1 + 1").unwrap_err();
//! assert!(err.to_string().contains("expected ':='"));
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod runtime;

// Re-export main types
pub use error::{Error, Result};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{
    parse_reader, parse_str, ArithOp, Natural, Parser, ParserConfig, Program, Statement, VarId,
};
pub use runtime::{Evaluator, EvaluatorConfig, VariableStore, OUTPUT};

/// Parses `source`, runs it with `inputs` bound to `x1, x2, ...` and returns `x0`
pub fn run(source: &str, inputs: &[Natural]) -> Result<Natural> {
    let program = parse_str(source)?;
    let mut evaluator = Evaluator::with_store(VariableStore::from_inputs(inputs));
    evaluator.execute(&program)?;
    Ok(evaluator.store().output())
}
