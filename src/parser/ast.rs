use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Variable identifier: the `n` in `xn`
pub type VarId = u64;

/// Non-negative value held by a variable or written as a literal
pub type Natural = u64;

/// A non-empty sequence of statements composed with `;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Statement>", into = "Vec<Statement>")]
pub struct Program {
    statements: Vec<Statement>,
}

impl Program {
    /// Creates a program; fails if `statements` is empty
    pub fn new(statements: Vec<Statement>) -> Result<Self> {
        if statements.is_empty() {
            return Err(Error::EmptyProgram);
        }
        Ok(Program { statements })
    }

    /// Statements in execution order
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Number of top-level statements (never zero)
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Always false; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Deepest `LOOP` nesting in this program (0 when there are no loops)
    pub fn depth(&self) -> usize {
        self.statements
            .iter()
            .map(|stmt| match stmt {
                Statement::Assignment { .. } => 0,
                Statement::Loop { body, .. } => 1 + body.depth(),
            })
            .max()
            .unwrap_or(0)
    }
}

impl TryFrom<Vec<Statement>> for Program {
    type Error = Error;

    fn try_from(statements: Vec<Statement>) -> Result<Self> {
        Program::new(statements)
    }
}

impl From<Program> for Vec<Statement> {
    fn from(program: Program) -> Self {
        program.statements
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

/// Direction of an assignment's arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArithOp {
    /// `+`
    Add,
    /// `-`, clamped at zero
    Sub,
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithOp::Add => write!(f, "+"),
            ArithOp::Sub => write!(f, "-"),
        }
    }
}

/// Statement types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statement {
    /// `x<target> := x<source> (+|-) <operand>`
    Assignment {
        /// Variable written
        target: VarId,
        /// Variable read
        source: VarId,
        /// Add or subtract
        op: ArithOp,
        /// Literal operand
        operand: Natural,
    },

    /// `LOOP x<counter> DO <body> END`
    Loop {
        /// Variable whose value at entry fixes the iteration count
        counter: VarId,
        /// Loop body
        body: Program,
    },
}

impl Statement {
    /// Convenience constructor for an assignment
    pub fn assign(target: VarId, source: VarId, op: ArithOp, operand: Natural) -> Self {
        Statement::Assignment {
            target,
            source,
            op,
            operand,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Assignment {
                target,
                source,
                op,
                operand,
            } => write!(f, "x{} := x{} {} {}", target, source, op, operand),
            Statement::Loop { counter, body } => write!(f, "LOOP x{} DO {} END", counter, body),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
