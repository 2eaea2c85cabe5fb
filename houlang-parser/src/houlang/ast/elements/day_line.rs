//! Day line element
//!
//!     A day line records one worked day: `day: HH:MM - HH:MM`. The two literals are not kept
//!     in the tree; their positions are implied by the ranges of the surrounding leaves.

use super::super::range::Range;
use super::super::traits::AstNode;
use super::values::{Day, Hour};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLine {
    pub day: Day,
    pub start: Hour,
    pub end: Hour,
    pub range: Range,
}

impl DayLine {
    /// Build a day line; its range spans from the day label to the end hour
    pub fn new(day: Day, start: Hour, end: Hour) -> Self {
        let range = day.range.join(&end.range);
        Self {
            day,
            start,
            end,
            range,
        }
    }

    /// The leaves of this line in source order
    pub fn leaves(&self) -> [&dyn AstNode; 3] {
        [&self.day, &self.start, &self.end]
    }
}

impl AstNode for DayLine {
    fn node_type(&self) -> &'static str {
        "DayLine"
    }

    fn display_label(&self) -> String {
        format!("{}: {} - {}", self.day.text, self.start.text, self.end.text)
    }

    fn range(&self) -> &Range {
        &self.range
    }
}
