//! Core token DFA
//!
//!     The five real token kinds are recognized by a logos lexer. Whitespace (space, tab, CR,
//!     LF) between tokens is skipped by the DFA itself, so the tokenizer only ever sees
//!     meaningful tokens.
//!
//!     The two literals carry a space, which overlaps with whitespace skipping. Logos resolves
//!     this by maximal munch: `" - "` is longer than the single skipped space, so the literal
//!     wins. A run of spaces right before `:` or `-` folds into the literal token.
//!
//!     `HOUR` and `DATE` share their leading digits. The DFA only commits once it sees what
//!     follows the digit run: `:` after two digits leads to `HOUR`, `-` after four digits
//!     leads to `DATE`. Four digits followed by `:` (as in `2024:01`) has no transition and is
//!     a lex error.

use logos::Logos;

/// Tokens produced by the logos DFA. The synthetic end token is added by the tokenizer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n]+")]
pub enum CoreToken {
    #[regex(r"[0-9]{4}(-[0-9]+)+")]
    Date,

    #[regex(r"[a-z]+")]
    Day,

    // Purely syntactic: 99:99 is a valid hour token
    #[regex(r"[0-9]{2}:[0-9]{2}")]
    Hour,

    #[regex(r" *: ")]
    Colon,

    #[regex(r" +- ")]
    Dash,
}
