use serde::{Deserialize, Serialize};

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Line number where token appears (1-indexed)
    pub line: usize,
    /// Column number where token starts (1-indexed)
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, line: usize, column: usize) -> Self {
        Token { kind, line, column }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}

/// All possible token types in the LOOP language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// Variable identifier `x<digits>`
    Variable(u64),
    /// Natural number literal
    Natural(u64),

    /// Assignment operator (:=)
    Assign,
    /// Plus operator (+)
    Plus,
    /// Minus operator (-)
    Minus,
    /// Semicolon separator
    Semicolon,

    /// LOOP keyword
    Loop,
    /// DO keyword
    Do,
    /// END keyword
    End,

    /// End of input
    Eof,
    /// Unexpected character; `None` when the input ended mid-token
    Invalid(Option<char>),
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TokenKind::Variable(id) => write!(f, "variable identifier x{}", id),
            TokenKind::Natural(n) => write!(f, "number {}", n),
            TokenKind::Assign => write!(f, "assignment operator ':='"),
            TokenKind::Plus => write!(f, "plus operator"),
            TokenKind::Minus => write!(f, "minus operator"),
            TokenKind::Semicolon => write!(f, "semicolon"),
            TokenKind::Loop => write!(f, "'LOOP' keyword"),
            TokenKind::Do => write!(f, "'DO' keyword"),
            TokenKind::End => write!(f, "'END' keyword"),
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Invalid(Some(c)) => write!(f, "invalid character {:?}", c),
            TokenKind::Invalid(None) => write!(f, "end of input inside a token"),
        }
    }
}
