//! Fluent assertion API for houlang trees
//!
//!     Each assertion names the node it is looking at (`weeks[1].day_lines[0]`) so a failure
//!     points straight at the offending line of the sample.

use crate::houlang::ast::{AstNode, DayLine, SourceFile, Week};

/// Create an assertion builder for a parsed file
pub fn assert_ast(file: &SourceFile) -> SourceFileAssertion<'_> {
    SourceFileAssertion { file }
}

pub struct SourceFileAssertion<'a> {
    file: &'a SourceFile,
}

impl<'a> SourceFileAssertion<'a> {
    /// Assert the number of weeks
    pub fn week_count(self, expected: usize) -> Self {
        let actual = self.file.weeks.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} weeks, found {}: [{}]",
            expected,
            actual,
            summarize_weeks(&self.file.weeks)
        );
        self
    }

    /// Assert the total number of day lines across all weeks
    pub fn day_line_count(self, expected: usize) -> Self {
        let actual = self.file.day_lines().count();
        assert_eq!(
            actual, expected,
            "Expected {} day lines in the file, found {}",
            expected, actual
        );
        self
    }

    /// Assert on a specific week
    pub fn week<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(WeekAssertion<'a>),
    {
        assert!(
            index < self.file.weeks.len(),
            "Week index {} out of bounds (file has {} weeks)",
            index,
            self.file.weeks.len()
        );
        assertion(WeekAssertion {
            week: &self.file.weeks[index],
            context: format!("weeks[{}]", index),
        });
        self
    }

    /// Assert the file has no weeks at all
    pub fn is_empty(self) -> Self {
        assert!(
            self.file.is_empty(),
            "Expected an empty file, found [{}]",
            summarize_weeks(&self.file.weeks)
        );
        self
    }
}

pub struct WeekAssertion<'a> {
    week: &'a Week,
    context: String,
}

impl<'a> WeekAssertion<'a> {
    /// Assert the week's date text
    pub fn date(self, expected: &str) -> Self {
        assert_eq!(
            self.week.date.text, expected,
            "{}: expected date {:?}, found {:?}",
            self.context, expected, self.week.date.text
        );
        self
    }

    /// Assert the number of day lines in this week
    pub fn day_line_count(self, expected: usize) -> Self {
        let actual = self.week.day_lines.len();
        assert_eq!(
            actual,
            expected,
            "{}: expected {} day lines, found {}: [{}]",
            self.context,
            expected,
            actual,
            self.week
                .day_lines
                .iter()
                .map(|line| line.display_label())
                .collect::<Vec<_>>()
                .join(", ")
        );
        self
    }

    /// Assert the days of this week in order
    pub fn days(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self
            .week
            .day_lines
            .iter()
            .map(|line| line.day.text.as_str())
            .collect();
        assert_eq!(actual, expected, "{}: day sequence differs", self.context);
        self
    }

    /// Assert the week starts at the given 0-based line and column
    pub fn starts_at(self, line: usize, column: usize) -> Self {
        let start = self.week.range.start;
        assert_eq!(
            (start.line, start.column),
            (line, column),
            "{}: expected week to start at {}:{}, found {}",
            self.context,
            line,
            column,
            start
        );
        self
    }

    /// Assert the week ends at the given 0-based line and column
    pub fn ends_at(self, line: usize, column: usize) -> Self {
        let end = self.week.range.end;
        assert_eq!(
            (end.line, end.column),
            (line, column),
            "{}: expected week to end at {}:{}, found {}",
            self.context,
            line,
            column,
            end
        );
        self
    }

    /// Assert on a specific day line
    pub fn day_line<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(DayLineAssertion<'a>),
    {
        assert!(
            index < self.week.day_lines.len(),
            "{}: day line index {} out of bounds (week has {} day lines)",
            self.context,
            index,
            self.week.day_lines.len()
        );
        assertion(DayLineAssertion {
            line: &self.week.day_lines[index],
            context: format!("{}.day_lines[{}]", self.context, index),
        });
        self
    }
}

pub struct DayLineAssertion<'a> {
    line: &'a DayLine,
    context: String,
}

impl DayLineAssertion<'_> {
    pub fn day(self, expected: &str) -> Self {
        assert_eq!(
            self.line.day.text, expected,
            "{}: expected day {:?}, found {:?}",
            self.context, expected, self.line.day.text
        );
        self
    }

    pub fn start(self, expected: &str) -> Self {
        assert_eq!(
            self.line.start.text, expected,
            "{}: expected start hour {:?}, found {:?}",
            self.context, expected, self.line.start.text
        );
        self
    }

    pub fn end(self, expected: &str) -> Self {
        assert_eq!(
            self.line.end.text, expected,
            "{}: expected end hour {:?}, found {:?}",
            self.context, expected, self.line.end.text
        );
        self
    }

    /// Assert the day line sits on the given 0-based line
    pub fn on_line(self, expected: usize) -> Self {
        assert_eq!(
            self.line.range.start.line, expected,
            "{}: expected day line on line {}, found {}",
            self.context, expected, self.line.range.start.line
        );
        self
    }
}

fn summarize_weeks(weeks: &[Week]) -> String {
    weeks
        .iter()
        .map(|week| format!("{} ({} days)", week.date.text, week.day_lines.len()))
        .collect::<Vec<_>>()
        .join(", ")
}
