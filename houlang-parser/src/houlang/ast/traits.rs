//! Traits shared by all AST nodes

use super::range::{Position, Range};

/// Uniform read access to any node, used by snapshots, lookups and formatters
pub trait AstNode {
    /// Node type name, e.g. "Week"
    fn node_type(&self) -> &'static str;

    /// Short human readable label, e.g. the date of a week
    fn display_label(&self) -> String;

    fn range(&self) -> &Range;

    fn start_position(&self) -> Position {
        self.range().start
    }
}
