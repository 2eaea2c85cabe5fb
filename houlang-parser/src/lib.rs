//! # houlang
//!
//! A tokenizer and parser for houlang, a line-oriented log of weekly working hours.
//!
//! A houlang file is a sequence of weeks. Each week opens with a date and lists one line per
//! worked day:
//!
//! ```text
//! 2024-01-15
//! mon: 08:00 - 17:00
//! tue: 09:00 - 18:00
//! 2024-01-22
//! wed: 10:00 - 16:00
//! ```
//!
//! File Layout
//!
//! src/houlang
//!   ├── token        Token kinds and the logos DFA
//!   ├── lexing       Cursor-driven tokenizer over the DFA
//!   ├── parsing      LL(1) recursive descent parser
//!   ├── ast          Tree nodes, ranges, snapshots and lookups
//!   ├── formats      treeviz, tag and detokenizer renderings
//!   ├── outline      Week symbols for editor tooling
//!   ├── processor    `<stage>-<format>` processing API
//!   └── testing      Sample corpus loader and AST assertions
//!
//! For testing guidelines, see the [testing module](houlang::testing).

pub mod houlang;
