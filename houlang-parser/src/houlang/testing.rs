//! Testing utilities
//!
//!     Tests should read houlang sources from the verified corpus in `samples/` rather than
//!     inline strings, and check trees with the fluent [assert_ast](fn@assert_ast) API rather
//!     than walking nodes by hand.
//!
//!     ```rust,ignore
//!     use houlang_parser::houlang::testing::{assert_ast, samples::HouSamples};
//!
//!     let file = HouSamples::sample(2).parse();
//!     assert_ast(&file)
//!         .week_count(2)
//!         .week(0, |week| {
//!             week.date("2024-01-15")
//!                 .day_line_count(2)
//!                 .day_line(0, |line| {
//!                     line.day("mon").start("08:00").end("17:00");
//!                 });
//!         });
//!     ```
//!
//!     Inline strings are still fine for error cases that are about one specific token, where
//!     a whole sample file would hide what is under test.
//!
//!     Logging is off unless a test asks for it with [init_test_logging]; `RUST_LOG` then
//!     controls the level as usual.

mod ast_assertions;
pub mod samples;

pub use ast_assertions::{assert_ast, DayLineAssertion, SourceFileAssertion, WeekAssertion};

/// Route `log` output through the test harness. Safe to call from every test.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
