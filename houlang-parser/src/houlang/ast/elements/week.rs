//! Week element
//!
//!     A week is a date header followed by at least one day line. The parser never builds an
//!     empty week: a date with no day line is a syntax error.

use super::super::range::{Position, Range};
use super::super::traits::AstNode;
use super::day_line::DayLine;
use super::values::Date;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    pub date: Date,
    pub day_lines: Vec<DayLine>,
    pub range: Range,
}

impl Week {
    /// Build a week; its range spans from the date to the last day line
    pub fn new(date: Date, day_lines: Vec<DayLine>) -> Self {
        let range = day_lines
            .iter()
            .fold(date.range.clone(), |range, line| range.join(&line.range));
        Self {
            date,
            day_lines,
            range,
        }
    }

    /// The day line whose range contains `position`
    pub fn day_line_at(&self, position: Position) -> Option<&DayLine> {
        self.day_lines
            .iter()
            .find(|line| line.range.contains(position))
    }
}

impl AstNode for Week {
    fn node_type(&self) -> &'static str {
        "Week"
    }

    fn display_label(&self) -> String {
        self.date.text.clone()
    }

    fn range(&self) -> &Range {
        &self.range
    }
}
