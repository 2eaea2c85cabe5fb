//! Errors shared by tokenizer entry points

use thiserror::Error;

/// Raised when no token transition matches the input at `offset`.
///
/// `fragment` holds the text the DFA had consumed for the failed token, which is at least the
/// offending character. A restart cursor outside the source (or inside a multi-byte
/// character) is reported the same way with an empty fragment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized input {fragment:?} at byte {offset}")]
pub struct LexError {
    pub offset: usize,
    pub fragment: String,
}

impl LexError {
    pub fn new(offset: usize, fragment: impl Into<String>) -> Self {
        Self {
            offset,
            fragment: fragment.into(),
        }
    }
}
