//! Output formats
//!
//!     - [treeviz]: one line per node, box-drawing connectors and icons
//!     - [tag]: XML-like tags mirroring the tree
//!     - [detokenizer]: token stream back to source text
//!
//! The tree formats render [AstSnapshot](crate::houlang::ast::AstSnapshot)s rather than
//! walking the AST themselves.

pub mod detokenizer;
pub mod tag;
pub mod treeviz;

pub use detokenizer::detokenize;
pub use tag::serialize_ast_tag;
pub use treeviz::{to_treeviz_str, to_treeviz_str_with_line_numbers};
