//! Treeviz formatter for AST nodes
//!
//! Treeviz is a visual representation of the AST with one line per node, which makes it quick
//! to scan for a line-oriented format like houlang. Nesting is drawn with box connectors, two
//! columns per level:
//!
//! <linum?><prefix><connector> <icon> <label> (label truncated to 30 characters)
//!
//! ```text
//! ⧉ 2 weeks, 3 days
//! ├─ ▦ 2024-01-15
//! │ ├─ • mon: 08:00 - 17:00
//! │ └─ • tue: 09:00 - 18:00
//! └─ ▦ 2024-01-22
//!   └─ • wed: 10:00 - 16:00
//! ```
//!
//! Icons
//!     SourceFile: ⧉
//!     Week: ▦
//!     DayLine: •

use crate::houlang::ast::{snapshot_from_source_file, AstSnapshot, SourceFile};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "SourceFile" => "⧉",
        "Week" => "▦",
        "DayLine" => "•",
        _ => "○",
    }
}

fn format_snapshot(
    snapshot: &AstSnapshot,
    prefix: &str,
    is_last: bool,
    show_linum: bool,
    output: &mut String,
) {
    let connector = if is_last { "└─" } else { "├─" };

    if show_linum {
        output.push_str(&format!("{:02} ", snapshot.line + 1));
    }
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(&snapshot.node_type),
        truncate(&snapshot.label, 30)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, &child_prefix, i + 1 == child_count, show_linum, output);
    }
}

fn format_root(snapshot: &AstSnapshot, show_linum: bool) -> String {
    let mut output = format!(
        "{} {}\n",
        get_icon(&snapshot.node_type),
        truncate(&snapshot.label, 30)
    );

    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, "", i + 1 == child_count, show_linum, &mut output);
    }

    output
}

pub fn to_treeviz_str(file: &SourceFile) -> String {
    to_treeviz_str_with_line_numbers(file, false)
}

/// Like [to_treeviz_str], prefixing every node line with its 1-based source line
pub fn to_treeviz_str_with_line_numbers(file: &SourceFile, show_linum: bool) -> String {
    let snapshot = snapshot_from_source_file(file, false);
    format_root(&snapshot, show_linum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::houlang::parsing::parse_document;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 30), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }

    #[test]
    fn test_empty_file() {
        let file = parse_document("").unwrap();
        assert_eq!(to_treeviz_str(&file), "⧉ 0 weeks, 0 days\n");
    }

    #[test]
    fn test_line_numbers() {
        let file = parse_document("2024-01-15\nmon: 08:00 - 17:00\n").unwrap();
        assert_eq!(
            to_treeviz_str_with_line_numbers(&file, true),
            "⧉ 1 weeks, 1 days\n01 └─ ▦ 2024-01-15\n02   └─ • mon: 08:00 - 17:00\n"
        );
    }
}
