use super::ast::{ArithOp, Program, Statement, VarId};
use crate::error::{Error, Result};
use crate::lexer::{Lexer, Token, TokenKind};

/// Limits applied while parsing
#[derive(Clone, Debug)]
pub struct ParserConfig {
    /// Maximum `LOOP` nesting depth before parsing fails
    ///
    /// The grammar itself has no limit. The default of 256 keeps recursion in
    /// the parser and evaluator well inside a default thread stack; raise it
    /// when running on a larger stack.
    pub max_nesting_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_nesting_depth: 256,
        }
    }
}

/// LL(1) recursive-descent parser for LOOP programs
///
/// ```text
/// Program    := Statement (';' Statement)*
/// Statement  := Assignment | Loop
/// Assignment := VarID ':=' VarID ('+' | '-') NatNum
/// Loop       := 'LOOP' VarID 'DO' Program 'END'
/// ```
pub struct Parser<I: Iterator<Item = char>> {
    lexer: Lexer<I>,
    config: ParserConfig,
    depth: usize,
}

impl<I: Iterator<Item = char>> Parser<I> {
    /// Creates a new parser reading from `lexer`
    pub fn new(lexer: Lexer<I>) -> Self {
        Parser::with_config(lexer, ParserConfig::default())
    }

    /// Creates a new parser with custom limits
    pub fn with_config(lexer: Lexer<I>, config: ParserConfig) -> Self {
        Parser {
            lexer,
            config,
            depth: 0,
        }
    }

    /// Parses a complete program followed by end of input
    pub fn parse(&mut self) -> Result<Program> {
        let program = self.read_program()?;

        let token = self.lexer.next_token()?;
        if token.kind != TokenKind::Eof {
            return Err(Self::expected_error("end of input", &token));
        }

        tracing::debug!(
            statements = program.len(),
            depth = program.depth(),
            "parsed LOOP program"
        );
        Ok(program)
    }

    /// Reads `;`-separated statements until a token other than `;` follows
    fn read_program(&mut self) -> Result<Program> {
        let mut statements = vec![self.read_statement()?];

        loop {
            let token = self.lexer.next_token()?;
            if token.kind == TokenKind::Semicolon {
                statements.push(self.read_statement()?);
            } else {
                self.lexer.push_token(token)?;
                break;
            }
        }

        Program::new(statements)
    }

    fn read_statement(&mut self) -> Result<Statement> {
        let token = self.lexer.next_token()?;
        match token.kind {
            TokenKind::Variable(target) => self.read_assignment(target),
            TokenKind::Loop => self.read_loop(),
            _ => Err(Self::expected_error(
                "variable identifier or 'LOOP'",
                &token,
            )),
        }
    }

    /// Rest of `VarID ':=' VarID ('+' | '-') NatNum` after the target
    fn read_assignment(&mut self, target: VarId) -> Result<Statement> {
        self.consume(TokenKind::Assign, "':='")?;
        let source = self.consume_variable()?;

        let token = self.lexer.next_token()?;
        let op = match token.kind {
            TokenKind::Plus => ArithOp::Add,
            TokenKind::Minus => ArithOp::Sub,
            _ => return Err(Self::expected_error("'+' or '-'", &token)),
        };

        let token = self.lexer.next_token()?;
        let operand = match token.kind {
            TokenKind::Natural(n) => n,
            _ => return Err(Self::expected_error("natural number", &token)),
        };

        Ok(Statement::Assignment {
            target,
            source,
            op,
            operand,
        })
    }

    /// Rest of `'LOOP' VarID 'DO' Program 'END'` after the keyword
    fn read_loop(&mut self) -> Result<Statement> {
        let counter = self.consume_variable()?;
        self.consume(TokenKind::Do, "'DO'")?;

        if self.depth >= self.config.max_nesting_depth {
            return Err(Error::NestingTooDeep {
                limit: self.config.max_nesting_depth,
            });
        }
        self.depth += 1;
        let body = self.read_program();
        self.depth -= 1;
        let body = body?;

        self.consume(TokenKind::End, "'END'")?;
        Ok(Statement::Loop { counter, body })
    }

    // Helper methods

    fn consume(&mut self, kind: TokenKind, expected: &str) -> Result<Token> {
        let token = self.lexer.next_token()?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(Self::expected_error(expected, &token))
        }
    }

    fn consume_variable(&mut self) -> Result<VarId> {
        let token = self.lexer.next_token()?;
        match token.kind {
            TokenKind::Variable(id) => Ok(id),
            _ => Err(Self::expected_error("variable identifier", &token)),
        }
    }

    /// Syntax error with expected/found pattern
    fn expected_error(expected: &str, found: &Token) -> Error {
        Error::syntax(
            found.line,
            found.column,
            format!("expected {}, found {}", expected, found),
        )
    }
}
