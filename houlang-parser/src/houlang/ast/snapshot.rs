//! AST Snapshot - a normalized intermediate representation of the AST tree
//!
//! A canonical, format-agnostic representation of the tree for serialization to any output
//! format (JSON, YAML, treeviz, tag). Serializers consume the output of
//! [snapshot_from_source_file] instead of walking the AST themselves.

use super::elements::{DayLine, SourceFile, Week};
use super::traits::AstNode;
use serde::Serialize;
use std::collections::BTreeMap;

/// A snapshot of an AST node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AstSnapshot {
    /// The type of node (e.g., "Week", "DayLine")
    pub node_type: String,

    /// The primary label of the node
    pub label: String,

    /// Additional attributes specific to the node type
    pub attributes: BTreeMap<String, String>,

    /// First line of the node (0-based), used by treeviz line numbers
    #[serde(skip)]
    pub line: usize,

    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    pub fn new(node_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            label: label.into(),
            attributes: BTreeMap::new(),
            line: 0,
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: AstSnapshot) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<AstSnapshot>) -> Self {
        self.children.extend(children);
        self
    }

    /// Label of the attribute `key`, if present
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

fn base_snapshot<T: AstNode>(node: &T, include_ranges: bool) -> AstSnapshot {
    let mut snapshot = AstSnapshot::new(node.node_type(), node.display_label());
    snapshot.line = node.start_position().line;
    if include_ranges {
        let range = node.range();
        snapshot = snapshot
            .with_attribute("span", format!("{}..{}", range.span.start, range.span.end))
            .with_attribute("range", range.to_string());
    }
    snapshot
}

fn build_day_line_snapshot(line: &DayLine, include_ranges: bool) -> AstSnapshot {
    base_snapshot(line, include_ranges)
        .with_attribute("day", line.day.text.as_str())
        .with_attribute("start", line.start.text.as_str())
        .with_attribute("end", line.end.text.as_str())
}

fn build_week_snapshot(week: &Week, include_ranges: bool) -> AstSnapshot {
    let children = week
        .day_lines
        .iter()
        .map(|line| build_day_line_snapshot(line, include_ranges))
        .collect();
    base_snapshot(week, include_ranges)
        .with_attribute("date", week.date.text.as_str())
        .with_children(children)
}

/// Build the snapshot tree for a whole file.
///
/// When `include_ranges` is set every node carries `span` (byte offsets) and `range`
/// (line:column) attributes.
pub fn snapshot_from_source_file(file: &SourceFile, include_ranges: bool) -> AstSnapshot {
    let children = file
        .weeks
        .iter()
        .map(|week| build_week_snapshot(week, include_ranges))
        .collect();
    base_snapshot(file, include_ranges).with_children(children)
}
