//! Token types shared by the tokenizer, the parser and tooling.
//!
//!     The grammar has five real tokens and one synthetic token:
//!
//!         DATE    `2024-01-15`, four digits then one or more `-digits` groups
//!         DAY     `mon`, lowercase ASCII letters
//!         HOUR    `08:00`, two digits, colon, two digits
//!         COLON   the literal `": "`
//!         DASH    the literal `" - "`
//!         END     synthetic, produced once the input is exhausted
//!
//!     Real tokens are recognized by the [core] DFA. The end token has an empty span at
//!     `source.len()` and no source text.
//!
//!     Tokens carry only their kind and byte span. Text is always read back from the source
//!     through [Token::text], so a token stream never owns copies of the input.

pub mod core;

pub use self::core::CoreToken;

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// The kind of a token, including the synthetic end-of-input marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Date,
    Day,
    Hour,
    Colon,
    Dash,
    End,
}

impl TokenKind {
    /// Name of the token as written in the grammar
    pub fn grammar_name(&self) -> &'static str {
        match self {
            TokenKind::Date => "DATE",
            TokenKind::Day => "DAY",
            TokenKind::Hour => "HOUR",
            TokenKind::Colon => "\": \"",
            TokenKind::Dash => "\" - \"",
            TokenKind::End => "END",
        }
    }

    /// True for the synthetic end token
    pub fn is_end(&self) -> bool {
        matches!(self, TokenKind::End)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.grammar_name())
    }
}

impl From<CoreToken> for TokenKind {
    fn from(token: CoreToken) -> Self {
        match token {
            CoreToken::Date => TokenKind::Date,
            CoreToken::Day => TokenKind::Day,
            CoreToken::Hour => TokenKind::Hour,
            CoreToken::Colon => TokenKind::Colon,
            CoreToken::Dash => TokenKind::Dash,
        }
    }
}

/// A token kind paired with the byte span it matched
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }

    /// The synthetic end token for a source of the given length
    pub fn end(source_len: usize) -> Self {
        Self::new(TokenKind::End, source_len..source_len)
    }

    /// The exact source text this token matched (empty for END)
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.span.clone()).unwrap_or("")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}..{}", self.kind, self.span.start, self.span.end)
    }
}
