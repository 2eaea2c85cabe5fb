//! Abstract Syntax Tree
//!
//!     The tree mirrors the grammar one node per nonterminal: a [SourceFile] owns [Week]s, a
//!     week owns its [Date] and its [DayLine]s, and a day line owns its [Day] and two [Hour]s.
//!
//!     Every node carries a [Range] with both the byte span and the line:column endpoints.
//!     Leaves hold the exact token text; no calendar or clock validation is applied.
//!
//!     Traversal for output goes through [AstSnapshot], and position queries go through the
//!     [lookup] functions.

pub mod elements;
pub mod error;
pub mod lookup;
pub mod range;
pub mod snapshot;
pub mod traits;

pub use elements::{Date, Day, DayLine, Hour, SourceFile, Week};
pub use error::PositionLookupError;
pub use lookup::{find_node_at, find_nodes_at_position, format_at_position, parse_position};
pub use range::{Position, Range, SourceLocation};
pub use snapshot::{snapshot_from_source_file, AstSnapshot};
pub use traits::AstNode;
