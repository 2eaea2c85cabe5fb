//! Parsing module for houlang
//!
//!     Source text goes to a tree in one pass:
//!         1. Lexing: the [Tokenizer](crate::houlang::lexing::Tokenizer) produces tokens on
//!            demand, so the parser never holds more than one token of lookahead.
//!         2. Parsing: a recursive descent [Parser] consumes the tokens and builds AST nodes
//!            directly, with ranges resolved to line:column as each node is created.
//!
//!     There is no recovery. The first lex or syntax error aborts the parse and is returned as
//!     a [ParseError]; no partial tree is produced.
//!
//!     Parsing holds no global state, so independent sources can be parsed on separate threads
//!     at the same time.

pub mod common;
pub mod parser;

pub use common::{ParseError, SyntaxError};
pub use parser::{parse, Parser};

pub use crate::houlang::ast::SourceFile;
pub use crate::houlang::formats::{serialize_ast_tag, to_treeviz_str};

/// Parse a houlang document. Alias of [parse], kept as the name tooling looks for.
pub fn parse_document(source: &str) -> Result<SourceFile, ParseError> {
    parse(source)
}
