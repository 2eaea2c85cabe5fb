//! Cursor-driven tokenizer
//!
//!     Wraps the logos DFA with the contract the parser relies on: tokens come out in source
//!     order with absolute byte spans, the stream always terminates with a synthetic END, and
//!     the first unmatched byte stops the stream with a [LexError].
//!
//!     A tokenizer can be started at any cursor with [Tokenizer::at]. Restarting at the
//!     cursor returned by a previous call yields exactly the tokens the first tokenizer would
//!     have produced next, which is what makes the free-standing `next_token(source, cursor)`
//!     contract possible.

use super::common::LexError;
use crate::houlang::token::{CoreToken, Token};
use logos::Logos;
use std::ops::Range;

/// Lazy token stream over an in-memory source
pub struct Tokenizer<'s> {
    source: &'s str,
    /// Offset of the slice handed to logos within `source`
    base: usize,
    inner: logos::Lexer<'s, CoreToken>,
    cursor: usize,
    failure: Option<LexError>,
    finished: bool,
}

impl<'s> Tokenizer<'s> {
    /// Start tokenizing at the beginning of `source`
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            base: 0,
            inner: CoreToken::lexer(source),
            cursor: 0,
            failure: None,
            finished: false,
        }
    }

    /// Restart tokenizing at byte offset `cursor`.
    ///
    /// The cursor must be within the source and on a char boundary.
    pub fn at(source: &'s str, cursor: usize) -> Result<Self, LexError> {
        let rest = source
            .get(cursor..)
            .ok_or_else(|| LexError::new(cursor, ""))?;
        Ok(Self {
            source,
            base: cursor,
            inner: CoreToken::lexer(rest),
            cursor,
            failure: None,
            finished: false,
        })
    }

    /// The source being tokenized
    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Byte offset just past the last token produced
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Produce the next token.
    ///
    /// Once the input is exhausted this returns END, and keeps returning END on further
    /// calls. After a lex error the same error is returned on every further call.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }

        match self.inner.next() {
            Some(Ok(core)) => {
                let span = self.absolute(self.inner.span());
                self.cursor = span.end;
                let token = Token::new(core.into(), span);
                log::trace!("token {} {:?}", token, token.text(self.source));
                Ok(token)
            }
            Some(Err(())) => {
                let span = self.absolute(self.inner.span());
                let error = LexError::new(span.start, self.inner.slice());
                log::trace!("lex error: {}", error);
                self.failure = Some(error.clone());
                Err(error)
            }
            None => {
                // Trailing whitespace was consumed by the DFA's skip rule
                self.cursor = self.source.len();
                Ok(Token::end(self.source.len()))
            }
        }
    }

    fn absolute(&self, span: Range<usize>) -> Range<usize> {
        (self.base + span.start)..(self.base + span.end)
    }
}

impl<'s> Iterator for Tokenizer<'s> {
    type Item = Result<Token, LexError>;

    /// Yields every token up to and including END, or up to and including the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        match &result {
            Ok(token) if token.kind.is_end() => self.finished = true,
            Err(_) => self.finished = true,
            Ok(_) => {}
        }
        Some(result)
    }
}

impl<'s> std::iter::FusedIterator for Tokenizer<'s> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::houlang::token::TokenKind;

    #[test]
    fn test_spans_are_absolute_after_restart() {
        let source = "2024-01-15\nmon: 08:00 - 17:00\n";
        let mut tokenizer = Tokenizer::at(source, 11).unwrap();
        let day = tokenizer.next_token().unwrap();
        assert_eq!(day, Token::new(TokenKind::Day, 11..14));
        assert_eq!(day.text(source), "mon");
        assert_eq!(tokenizer.cursor(), 14);
    }

    #[test]
    fn test_end_is_repeated() {
        let mut tokenizer = Tokenizer::new("  \n");
        assert_eq!(tokenizer.next_token().unwrap(), Token::end(3));
        assert_eq!(tokenizer.next_token().unwrap(), Token::end(3));
        assert_eq!(tokenizer.cursor(), 3);
    }

    #[test]
    fn test_iterator_stops_after_end() {
        let kinds: Vec<TokenKind> = Tokenizer::new("2024-01-15")
            .map(|result| result.unwrap().kind)
            .collect();
        assert_eq!(kinds, vec![TokenKind::Date, TokenKind::End]);
    }

    #[test]
    fn test_error_is_sticky() {
        let mut tokenizer = Tokenizer::new("mon# 08:00");
        assert_eq!(tokenizer.next_token().unwrap().kind, TokenKind::Day);
        let first = tokenizer.next_token().unwrap_err();
        assert_eq!(first.offset, 3);
        assert_eq!(tokenizer.next_token().unwrap_err(), first);
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let results: Vec<_> = Tokenizer::new("mon # tue").collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }

    #[test]
    fn test_restart_outside_source_is_an_error() {
        let error = Tokenizer::at("mon", 7).err().unwrap();
        assert_eq!(error, LexError::new(7, ""));
    }

    #[test]
    fn test_restart_inside_multibyte_char_is_an_error() {
        assert!(Tokenizer::at("é", 1).is_err());
    }
}
