//! XML-like AST tag serialization
//!
//! Node types become snake_case tags; node values become attributes. Day lines have no
//! children and are written as self-closing tags.
//!
//! ```text
//! <source_file>
//!   <week date="2024-01-15">
//!     <day_line day="mon" start="08:00" end="17:00"/>
//!   </week>
//! </source_file>
//! ```

use crate::houlang::ast::{snapshot_from_source_file, AstSnapshot, SourceFile};

/// Serialize a file to AST tag format
pub fn serialize_ast_tag(file: &SourceFile) -> String {
    let snapshot = snapshot_from_source_file(file, false);
    let mut output = String::from("<source_file>\n");
    for week in &snapshot.children {
        serialize_week(week, &mut output);
    }
    output.push_str("</source_file>");
    output
}

fn serialize_week(week: &AstSnapshot, output: &mut String) {
    output.push_str(&format!(
        "  <week date=\"{}\">\n",
        escape_xml(week.attribute("date").unwrap_or_default())
    ));
    for line in &week.children {
        output.push_str(&format!(
            "    <day_line day=\"{}\" start=\"{}\" end=\"{}\"/>\n",
            escape_xml(line.attribute("day").unwrap_or_default()),
            escape_xml(line.attribute("start").unwrap_or_default()),
            escape_xml(line.attribute("end").unwrap_or_default()),
        ));
    }
    output.push_str("  </week>\n");
}

/// Escape XML special characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
