//! Error types for the Loopi interpreter

use thiserror::Error;

/// Loopi interpreter errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Parse errors
    /// Syntax error encountered during parsing
    ///
    /// **Triggered by:** A token other than the one the grammar requires
    /// **Example:** `x1 = x1 + 1` (missing `:` in the assignment operator)
    #[error("Syntax error at line {line}, column {col}: {message}")]
    SyntaxError {
        /// Line number where error occurred
        line: usize,
        /// Column number where error occurred
        col: usize,
        /// Error description
        message: String,
    },

    /// Digit run too large for a variable id or literal
    #[error("Number too large at line {line}, column {col}: {digits}")]
    NumberOverflow {
        /// Line number where the digit run starts
        line: usize,
        /// Column number where the digit run starts
        col: usize,
        /// The digits as written in the source
        digits: String,
    },

    /// A second token was pushed back before the first was read again
    #[error("Cannot push back more than one token")]
    PushbackOverflow,

    /// `LOOP` constructs nested beyond the parser limit
    #[error("Loop nesting exceeds limit of {limit}")]
    NestingTooDeep {
        /// Configured maximum nesting depth
        limit: usize,
    },

    /// A program must contain at least one statement
    #[error("Program must contain at least one statement")]
    EmptyProgram,

    // Runtime errors
    /// Lookup or update on a store that was never bootstrapped
    ///
    /// **Triggered by:** Executing against `VariableStore::new()` without seeding `x0`
    /// **Prevention:** Use `VariableStore::with_output()` or `from_inputs()`
    #[error("Variable store is empty: seed the output variable x0 first")]
    EmptyStore,

    /// Addition exceeded the representable range
    #[error("Arithmetic overflow: x{target} := {value} + {operand}")]
    ArithmeticOverflow {
        /// Variable being assigned
        target: u64,
        /// Value read from the source variable
        value: u64,
        /// Literal operand
        operand: u64,
    },

    /// Step budget exhausted
    #[error("Execution limit exceeded (max: {limit} statements)")]
    ExecutionLimitExceeded {
        /// Maximum allowed statements
        limit: u64,
    },

    // External errors
    /// Reading the program source failed
    #[error("I/O error: {0}")]
    Io(String),
}

impl Error {
    /// Create a syntax error at a source position
    pub fn syntax(line: usize, col: usize, message: impl Into<String>) -> Self {
        Error::SyntaxError {
            line,
            col,
            message: message.into(),
        }
    }

    /// True for errors raised while turning text into an AST
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::SyntaxError { .. }
                | Error::NumberOverflow { .. }
                | Error::PushbackOverflow
                | Error::NestingTooDeep { .. }
                | Error::EmptyProgram
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Result type for Loopi operations
pub type Result<T> = std::result::Result<T, Error>;
