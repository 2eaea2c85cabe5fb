//! Lexer
//!
//!     Tokenization is a single pass of the logos DFA defined in [core](crate::houlang::token::core).
//!     There are no transformation stages: the grammar is line-oriented only by convention,
//!     newlines are plain whitespace, and every token the parser needs comes straight out of
//!     the DFA. The only synthetic token is END.
//!
//! Entry Points
//!
//!     - [Tokenizer]: a lazy, restartable token stream (the parser pulls from this).
//!     - [next_token]: the cursor-passing form, `(source, cursor) -> (token, new cursor)`.
//!     - [tokenize]: collect a whole source, END included, failing on the first lex error.
//!
//! Byte Ranges
//!
//!     Every token carries the absolute byte range it matched. The gaps between ranges are
//!     exactly the skipped whitespace, so concatenating gaps and token text rebuilds the
//!     source. See [detokenizer](crate::houlang::formats::detokenizer).

pub mod common;
pub mod tokenizer;

pub use common::LexError;
pub use tokenizer::Tokenizer;

use crate::houlang::token::Token;

/// Read one token starting at `cursor`, returning it with the cursor to resume from.
///
/// At end of input this returns END and a cursor equal to `source.len()`.
pub fn next_token(source: &str, cursor: usize) -> Result<(Token, usize), LexError> {
    let mut tokenizer = Tokenizer::at(source, cursor)?;
    let token = tokenizer.next_token()?;
    Ok((token, tokenizer.cursor()))
}

/// Tokenize a whole source. The returned tokens always end with END.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Tokenizer::new(source).collect()
}
