//! AST element definitions
//!
//!     source_file := week*
//!     week        := DATE day_line+
//!     day_line    := DAY ": " HOUR " - " HOUR
//!
//! Nodes are built once by the parser and never mutated afterwards.

pub mod day_line;
pub mod source_file;
pub mod values;
pub mod week;

pub use day_line::DayLine;
pub use source_file::SourceFile;
pub use values::{Date, Day, Hour};
pub use week::Week;
