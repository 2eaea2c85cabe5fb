//! Errors reported by the parser

use crate::houlang::lexing::LexError;
use crate::houlang::token::TokenKind;
use std::fmt;
use thiserror::Error;

/// The lookahead token is not in the expected set for the active grammar position
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {}, found {found} at byte {offset}", ExpectedList(.expected.as_slice()))]
pub struct SyntaxError {
    pub expected: Vec<TokenKind>,
    pub found: TokenKind,
    pub offset: usize,
}

impl SyntaxError {
    pub fn new(expected: &[TokenKind], found: TokenKind, offset: usize) -> Self {
        Self {
            expected: expected.to_vec(),
            found,
            offset,
        }
    }
}

/// Renders `[DATE, END]` as `DATE or END`
struct ExpectedList<'a>(&'a [TokenKind]);

impl fmt::Display for ExpectedList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, kind) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" or ")?;
            }
            write!(f, "{}", kind)?;
        }
        Ok(())
    }
}

/// Any failure of a parse. Parsing stops at the first one; no partial tree is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
}

impl ParseError {
    /// Byte offset the error points at
    pub fn offset(&self) -> usize {
        match self {
            ParseError::Lex(error) => error.offset,
            ParseError::Syntax(error) => error.offset,
        }
    }
}
