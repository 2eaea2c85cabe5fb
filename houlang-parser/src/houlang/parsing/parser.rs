//! Recursive descent parser
//!
//!     The grammar is LL(1): every choice is made on one token of lookahead and no rule ever
//!     backtracks.
//!
//!         source_file := week*
//!         week        := DATE day_line+
//!         day_line    := DAY ": " HOUR " - " HOUR
//!
//!     Top level loop: on DATE parse a week and loop, on END accept, anything else is a syntax
//!     error expecting DATE or END.
//!
//!     Inside a week: after the date, DAY is required (a week needs one day line). Then day
//!     lines are parsed while the lookahead is DAY; DATE or END close the week and hand control
//!     back to the top level loop, which reports anything else.
//!
//!     Inside a day line every token is required in strict sequence; a mismatch is a syntax
//!     error naming the single kind that was expected.

use super::common::{ParseError, SyntaxError};
use crate::houlang::ast::{Date, Day, DayLine, Hour, Range, SourceFile, SourceLocation, Week};
use crate::houlang::lexing::Tokenizer;
use crate::houlang::token::{Token, TokenKind};

const WEEK_OR_END: &[TokenKind] = &[TokenKind::Date, TokenKind::End];

/// Single-pass parser over one in-memory source
pub struct Parser<'s> {
    source: &'s str,
    tokenizer: Tokenizer<'s>,
    lookahead: Token,
    locations: SourceLocation,
}

impl<'s> Parser<'s> {
    /// Create a parser and read the first lookahead token
    pub fn new(source: &'s str) -> Result<Self, ParseError> {
        let mut tokenizer = Tokenizer::new(source);
        let lookahead = tokenizer.next_token()?;
        Ok(Self {
            source,
            tokenizer,
            lookahead,
            locations: SourceLocation::new(source),
        })
    }

    /// Parse the whole source into a tree, failing on the first error
    pub fn parse(mut self) -> Result<SourceFile, ParseError> {
        let mut weeks = Vec::new();

        loop {
            match self.lookahead.kind {
                TokenKind::Date => {
                    let week = self.parse_week()?;
                    log::debug!(
                        "parsed week {} with {} day lines",
                        week.date.text,
                        week.day_lines.len()
                    );
                    weeks.push(week);
                }
                TokenKind::End => break,
                found => {
                    return Err(
                        SyntaxError::new(WEEK_OR_END, found, self.lookahead.span.start).into(),
                    )
                }
            }
        }

        let range = match (weeks.first(), weeks.last()) {
            (Some(first), Some(last)) => first.range.join(&last.range),
            _ => Range::default(),
        };
        Ok(SourceFile::new(weeks, range))
    }

    fn parse_week(&mut self) -> Result<Week, ParseError> {
        let date_token = self.expect(TokenKind::Date)?;
        let date = Date::new(self.text(&date_token), self.range(&date_token));

        // day_line+ : the first one is mandatory
        if self.lookahead.kind != TokenKind::Day {
            return Err(SyntaxError::new(
                &[TokenKind::Day],
                self.lookahead.kind,
                self.lookahead.span.start,
            )
            .into());
        }

        let mut day_lines = Vec::new();
        while self.lookahead.kind == TokenKind::Day {
            day_lines.push(self.parse_day_line()?);
        }

        Ok(Week::new(date, day_lines))
    }

    fn parse_day_line(&mut self) -> Result<DayLine, ParseError> {
        let day_token = self.expect(TokenKind::Day)?;
        self.expect(TokenKind::Colon)?;
        let start_token = self.expect(TokenKind::Hour)?;
        self.expect(TokenKind::Dash)?;
        let end_token = self.expect(TokenKind::Hour)?;

        Ok(DayLine::new(
            Day::new(self.text(&day_token), self.range(&day_token)),
            Hour::new(self.text(&start_token), self.range(&start_token)),
            Hour::new(self.text(&end_token), self.range(&end_token)),
        ))
    }

    /// Consume the lookahead if it has the given kind
    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.lookahead.kind != kind {
            return Err(
                SyntaxError::new(&[kind], self.lookahead.kind, self.lookahead.span.start).into(),
            );
        }
        self.advance()
    }

    /// Replace the lookahead with the next token and return the previous one
    fn advance(&mut self) -> Result<Token, ParseError> {
        let next = self.tokenizer.next_token()?;
        Ok(std::mem::replace(&mut self.lookahead, next))
    }

    fn text(&self, token: &Token) -> &'s str {
        token.text(self.source)
    }

    fn range(&self, token: &Token) -> Range {
        self.locations.byte_range_to_ast_range(&token.span)
    }
}

/// Parse a complete houlang source
pub fn parse(source: &str) -> Result<SourceFile, ParseError> {
    Parser::new(source)?.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::houlang::ast::Position;

    #[test]
    fn test_single_week() {
        let file = parse("2024-01-15\nmon: 08:00 - 17:00\n").unwrap();

        assert_eq!(file.weeks.len(), 1);
        let week = &file.weeks[0];
        assert_eq!(week.date.text, "2024-01-15");
        assert_eq!(week.day_lines.len(), 1);

        let line = &week.day_lines[0];
        assert_eq!(line.day.text, "mon");
        assert_eq!(line.start.text, "08:00");
        assert_eq!(line.end.text, "17:00");
    }

    #[test]
    fn test_ranges() {
        let file = parse("2024-01-15\nmon: 08:00 - 17:00\n").unwrap();
        let week = &file.weeks[0];

        assert_eq!(week.date.range.span, 0..10);
        assert_eq!(week.range.span, 0..29);
        assert_eq!(week.range.end, Position::new(1, 18));
        assert_eq!(week.day_lines[0].end.range.start, Position::new(1, 13));
        assert_eq!(file.range, week.range);
    }

    #[test]
    fn test_empty_source() {
        let file = parse("").unwrap();
        assert!(file.is_empty());
        assert_eq!(file.range, Range::default());
    }

    #[test]
    fn test_missing_date() {
        let error = parse("mon: 08:00 - 17:00").unwrap_err();
        assert_eq!(
            error,
            ParseError::Syntax(SyntaxError::new(
                &[TokenKind::Date, TokenKind::End],
                TokenKind::Day,
                0
            ))
        );
    }

    #[test]
    fn test_week_without_day_lines() {
        let error = parse("2024-01-15\n").unwrap_err();
        assert_eq!(
            error,
            ParseError::Syntax(SyntaxError::new(&[TokenKind::Day], TokenKind::End, 11))
        );
    }

    #[test]
    fn test_missing_dash() {
        let error = parse("2024-01-15\nmon: 08:00 17:00").unwrap_err();
        assert_eq!(
            error,
            ParseError::Syntax(SyntaxError::new(&[TokenKind::Dash], TokenKind::Hour, 22))
        );
    }

    #[test]
    fn test_lex_error_surfaces() {
        let error = parse("2024-01-15\nmon; 08:00 - 17:00").unwrap_err();
        assert!(matches!(error, ParseError::Lex(_)));
        assert_eq!(error.offset(), 14);
    }

    #[test]
    fn test_error_messages() {
        let error = parse("mon: 08:00 - 17:00").unwrap_err();
        assert_eq!(
            error.to_string(),
            "syntax error: expected DATE or END, found DAY at byte 0"
        );
    }
}
