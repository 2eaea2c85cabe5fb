//! Week outline
//!
//!     Editors show a houlang file as a list of weeks, each named after its date. This module
//!     builds those symbols from a parsed file so an editor integration only has to translate
//!     them into its own protocol types.
//!
//!     A week symbol spans the whole week and selects its date. Day line symbols are nested
//!     under their week when [OutlineConfig::include_day_lines] is set.

use crate::houlang::ast::{AstNode, DayLine, Range, SourceFile, Week};
use houlang_config::OutlineConfig;
use serde::Serialize;

/// Outline entry for one week
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekSymbol {
    pub name: String,
    pub range: Range,
    pub selection_range: Range,
    pub children: Vec<DaySymbol>,
}

/// Outline entry for one day line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySymbol {
    pub name: String,
    pub detail: String,
    pub range: Range,
    pub selection_range: Range,
}

impl DaySymbol {
    fn from_day_line(line: &DayLine) -> Self {
        Self {
            name: line.day.text.clone(),
            detail: format!("{} - {}", line.start.text, line.end.text),
            range: line.range.clone(),
            selection_range: line.day.range.clone(),
        }
    }
}

impl WeekSymbol {
    fn from_week(week: &Week, config: &OutlineConfig) -> Self {
        let children = if config.include_day_lines {
            week.day_lines.iter().map(DaySymbol::from_day_line).collect()
        } else {
            Vec::new()
        };
        Self {
            name: week.display_label(),
            range: week.range.clone(),
            selection_range: week.date.range.clone(),
            children,
        }
    }
}

/// One symbol per week, in source order
pub fn document_outline(file: &SourceFile, config: &OutlineConfig) -> Vec<WeekSymbol> {
    file.weeks
        .iter()
        .map(|week| WeekSymbol::from_week(week, config))
        .collect()
}
