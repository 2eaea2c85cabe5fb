//! Main module for houlang library functionality

pub mod ast;
pub mod formats;
pub mod lexing;
pub mod outline;
pub mod parsing;
pub mod processor;
pub mod testing;
pub mod token;
