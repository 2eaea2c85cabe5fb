//! Source file element
//!
//!     The root of the tree. It owns every week in source order; an empty file has no weeks
//!     and an empty range at offset 0.

use super::super::range::{Position, Range};
use super::super::traits::AstNode;
use super::day_line::DayLine;
use super::week::Week;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceFile {
    pub weeks: Vec<Week>,
    pub range: Range,
}

impl SourceFile {
    pub fn new(weeks: Vec<Week>, range: Range) -> Self {
        Self { weeks, range }
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// All day lines of all weeks, in source order
    pub fn day_lines(&self) -> impl Iterator<Item = &DayLine> {
        self.weeks.iter().flat_map(|week| week.day_lines.iter())
    }

    /// The week whose range contains `position`
    pub fn week_at(&self, position: Position) -> Option<&Week> {
        self.weeks.iter().find(|week| week.range.contains(position))
    }

    /// The day line whose range contains `position`
    pub fn day_line_at(&self, position: Position) -> Option<&DayLine> {
        self.week_at(position)
            .and_then(|week| week.day_line_at(position))
    }

    /// Every node containing `position`, outermost first, down to the deepest leaf
    pub fn elements_at(&self, position: Position) -> Vec<&dyn AstNode> {
        let mut path: Vec<&dyn AstNode> = Vec::new();
        let Some(week) = self.week_at(position) else {
            return path;
        };
        path.push(week);

        if week.date.range.contains(position) {
            path.push(&week.date);
        } else if let Some(line) = week.day_line_at(position) {
            path.push(line);
            if let Some(leaf) = line
                .leaves()
                .into_iter()
                .find(|leaf| leaf.range().contains(position))
            {
                path.push(leaf);
            }
        }
        path
    }
}

impl AstNode for SourceFile {
    fn node_type(&self) -> &'static str {
        "SourceFile"
    }

    fn display_label(&self) -> String {
        let days: usize = self.weeks.iter().map(|week| week.day_lines.len()).sum();
        format!("{} weeks, {} days", self.weeks.len(), days)
    }

    fn range(&self) -> &Range {
        &self.range
    }
}
