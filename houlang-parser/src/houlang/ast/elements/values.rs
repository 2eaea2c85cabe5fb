//! Leaf values: dates, day labels and hours
//!
//! Leaves keep the exact token text. Nothing here checks calendar or clock ranges: `2024-13-45`
//! and `99:99` are valid leaves because the grammar is purely syntactic.

use super::super::range::Range;
use super::super::traits::AstNode;

/// The date that opens a week, textual form `YYYY-MM-DD`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Date {
    pub text: String,
    pub range: Range,
}

impl Date {
    pub fn new(text: impl Into<String>, range: Range) -> Self {
        Self {
            text: text.into(),
            range,
        }
    }

    /// The `-` separated numeric groups, e.g. `["2024", "01", "15"]`
    pub fn parts(&self) -> Vec<&str> {
        self.text.split('-').collect()
    }
}

impl AstNode for Date {
    fn node_type(&self) -> &'static str {
        "Date"
    }

    fn display_label(&self) -> String {
        self.text.clone()
    }

    fn range(&self) -> &Range {
        &self.range
    }
}

/// A lowercase day label such as `mon`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    pub text: String,
    pub range: Range,
}

impl Day {
    pub fn new(text: impl Into<String>, range: Range) -> Self {
        Self {
            text: text.into(),
            range,
        }
    }
}

impl AstNode for Day {
    fn node_type(&self) -> &'static str {
        "Day"
    }

    fn display_label(&self) -> String {
        self.text.clone()
    }

    fn range(&self) -> &Range {
        &self.range
    }
}

/// A clock value, textual form `HH:MM`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hour {
    pub text: String,
    pub range: Range,
}

impl Hour {
    pub fn new(text: impl Into<String>, range: Range) -> Self {
        Self {
            text: text.into(),
            range,
        }
    }

    /// The hour and minute digit pairs, e.g. `("08", "00")`
    pub fn parts(&self) -> (&str, &str) {
        self.text.split_once(':').unwrap_or((self.text.as_str(), ""))
    }
}

impl AstNode for Hour {
    fn node_type(&self) -> &'static str {
        "Hour"
    }

    fn display_label(&self) -> String {
        self.text.clone()
    }

    fn range(&self) -> &Range {
        &self.range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_parts() {
        let date = Date::new("2024-1-15", Range::default());
        assert_eq!(date.parts(), vec!["2024", "1", "15"]);
    }

    #[test]
    fn test_hour_parts_are_not_range_checked() {
        let hour = Hour::new("99:99", Range::default());
        assert_eq!(hour.parts(), ("99", "99"));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Day::new("mon", Range::default()).display_label(), "mon");
        assert_eq!(Hour::new("08:00", Range::default()).node_type(), "Hour");
    }
}
