//! Position based node lookup, for hover and go-to style tooling

use super::elements::SourceFile;
use super::error::PositionLookupError;
use super::range::Position;
use super::traits::AstNode;

/// Parse a `line:column` string (0-based) into a position
pub fn parse_position(input: &str) -> Result<Position, PositionLookupError> {
    let (line, column) = input
        .trim()
        .split_once(':')
        .ok_or_else(|| PositionLookupError::InvalidPositionFormat(input.to_string()))?;
    let parse = |part: &str| {
        part.parse::<usize>()
            .map_err(|_| PositionLookupError::InvalidPositionFormat(input.to_string()))
    };
    Ok(Position::new(parse(line)?, parse(column)?))
}

/// All nodes containing the position, outermost first
pub fn find_nodes_at_position(file: &SourceFile, position: Position) -> Vec<&dyn AstNode> {
    file.elements_at(position)
}

/// Resolve a `line:column` string to the nodes under it.
///
/// Fails when the string is malformed or when no node covers the position.
pub fn find_node_at<'a>(
    file: &'a SourceFile,
    position: &str,
) -> Result<Vec<&'a dyn AstNode>, PositionLookupError> {
    let position = parse_position(position)?;
    let nodes = find_nodes_at_position(file, position);
    if nodes.is_empty() {
        return Err(PositionLookupError::NotFound {
            line: position.line,
            column: position.column,
        });
    }
    Ok(nodes)
}

/// Describe the nodes under a position, one `- Type: label` line per node
pub fn format_at_position(file: &SourceFile, position: Position) -> String {
    let nodes = find_nodes_at_position(file, position);
    if nodes.is_empty() {
        "No AST nodes at this position".to_string()
    } else {
        nodes
            .iter()
            .map(|node| format!("- {}: {}", node.node_type(), node.display_label()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
