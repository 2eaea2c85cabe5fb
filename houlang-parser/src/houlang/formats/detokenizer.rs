//! Detokenizer
//!
//! Converts a token stream back into source text. Tokens only carry byte spans, so the text
//! of each token and the whitespace the DFA skipped before it are both read from the
//! source. Feeding the complete output of [tokenize](crate::houlang::lexing::tokenize)
//! rebuilds the source exactly; the END token picks up any trailing whitespace.
//!
//! Useful for round-trip testing (source -> tokens -> source) and for checking that token
//! spans tile the input without overlaps.

use crate::houlang::token::Token;

/// Rebuild text from tokens and the whitespace between them
pub fn detokenize(source: &str, tokens: &[Token]) -> String {
    let mut output = String::with_capacity(source.len());
    let mut cursor = 0;

    for token in tokens {
        if let Some(gap) = source.get(cursor..token.span.start) {
            output.push_str(gap);
        }
        output.push_str(token.text(source));
        cursor = cursor.max(token.span.end);
    }

    output
}
