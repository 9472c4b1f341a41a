use std::iter::Peekable;
use std::str::Chars;

use super::token::{Token, TokenKind};
use crate::error::{Error, Result};

/// On-demand scanner for LOOP source text
///
/// Tokens are produced one at a time from the owned character stream. A single
/// slot holds a pushed-back token for the parser's one-token lookahead.
pub struct Lexer<I: Iterator<Item = char>> {
    /// Remaining source characters
    source: Peekable<I>,
    /// Token returned by the next call to `next_token`, if any
    pushback: Option<Token>,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
}

impl<'a> Lexer<Chars<'a>> {
    /// Creates a new lexer over a source string
    pub fn new(source: &'a str) -> Self {
        Lexer::from_chars(source.chars())
    }
}

impl<I: Iterator<Item = char>> Lexer<I> {
    /// Creates a new lexer over any character stream
    pub fn from_chars(chars: I) -> Self {
        Lexer {
            source: chars.peekable(),
            pushback: None,
            line: 1,
            column: 1,
        }
    }

    /// Reads the next token, draining the pushback slot first
    pub fn next_token(&mut self) -> Result<Token> {
        if let Some(token) = self.pushback.take() {
            return Ok(token);
        }

        self.skip_whitespace();
        let (line, column) = (self.line, self.column);

        let c = match self.advance() {
            Some(c) => c,
            None => return Ok(Token::new(TokenKind::Eof, line, column)),
        };

        let kind = match c {
            'x' => TokenKind::Variable(self.scan_number(String::new(), line, column)?),
            c if c.is_ascii_digit() => {
                TokenKind::Natural(self.scan_number(c.to_string(), line, column)?)
            }

            ':' => self.match_rest("=", TokenKind::Assign),
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            ';' => TokenKind::Semicolon,

            // Keywords are matched exactly with no fallback
            'L' => self.match_rest("OOP", TokenKind::Loop),
            'D' => self.match_rest("O", TokenKind::Do),
            'E' => self.match_rest("ND", TokenKind::End),

            other => TokenKind::Invalid(Some(other)),
        };

        Ok(Token::new(kind, line, column))
    }

    /// Returns a token to the stream; only one may be outstanding
    pub fn push_token(&mut self, token: Token) -> Result<()> {
        if self.pushback.is_some() {
            return Err(Error::PushbackOverflow);
        }
        self.pushback = Some(token);
        Ok(())
    }

    /// Scans all remaining tokens, including the final `Eof`
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.source.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    /// Consumes `rest` character by character. The first mismatching character
    /// is consumed and reported.
    fn match_rest(&mut self, rest: &str, kind: TokenKind) -> TokenKind {
        for expected in rest.chars() {
            match self.advance() {
                Some(c) if c == expected => {}
                other => return TokenKind::Invalid(other),
            }
        }
        kind
    }

    /// Greedily consumes a digit run; an empty run reads as 0
    fn scan_number(&mut self, mut digits: String, line: usize, col: usize) -> Result<u64> {
        while let Some(c) = self.source.peek().copied().filter(char::is_ascii_digit) {
            digits.push(c);
            self.advance();
        }

        if digits.is_empty() {
            return Ok(0);
        }

        digits
            .parse()
            .map_err(|_| Error::NumberOverflow { line, col, digits })
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.source.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }
}
