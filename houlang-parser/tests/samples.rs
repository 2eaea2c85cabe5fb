//! Parsing the verified sample corpus
//!
//! Each test loads one file from `samples/` and checks the whole tree with assert_ast.

use houlang_parser::houlang::formats::detokenize;
use houlang_parser::houlang::parsing::{ParseError, SyntaxError};
use houlang_parser::houlang::testing::samples::HouSamples;
use houlang_parser::houlang::testing::{assert_ast, init_test_logging};
use houlang_parser::houlang::token::TokenKind;

#[test]
fn test_sample_01_single_week() {
    init_test_logging();
    let file = HouSamples::sample(1).parse();

    assert_ast(&file).week_count(1).week(0, |week| {
        week.date("2024-01-15")
            .days(&["mon", "tue", "wed"])
            .starts_at(0, 0)
            .ends_at(3, 18)
            .day_line(2, |line| {
                line.start("08:30").end("16:45").on_line(3);
            });
    });
}

#[test]
fn test_sample_02_two_weeks() {
    let file = HouSamples::sample(2).parse();

    assert_ast(&file)
        .week_count(2)
        .day_line_count(3)
        .week(0, |week| {
            week.date("2024-01-15").days(&["mon", "tue"]);
        })
        .week(1, |week| {
            week.date("2024-01-22")
                .days(&["wed"])
                .starts_at(3, 0)
                .day_line(0, |line| {
                    line.start("10:00").end("16:00");
                });
        });
}

#[test]
fn test_sample_03_loose_whitespace() {
    let file = HouSamples::sample(3).parse();

    assert_ast(&file).week_count(1).week(0, |week| {
        week.date("2024-02-05")
            .days(&["mon", "mon", "fri"])
            .ends_at(6, 18)
            .day_line(0, |line| {
                line.start("08:00").end("12:00").on_line(2);
            })
            .day_line(1, |line| {
                line.start("13:00").end("17:30").on_line(3);
            })
            .day_line(2, |line| {
                line.day("fri").start("07:45").end("15:15").on_line(6);
            });
    });
}

#[test]
fn test_sample_03_detokenizes_to_source() {
    let sample = HouSamples::sample(3);
    let tokens = sample.tokenize();
    assert_eq!(detokenize(&sample.source(), &tokens), sample.source());
}

#[test]
fn test_sample_04_empty() {
    let file = HouSamples::sample(4).parse();
    assert_ast(&file).is_empty().day_line_count(0);
}

#[test]
fn test_sample_05_week_without_days() {
    let error = HouSamples::sample(5).parse_error();
    assert_eq!(
        error,
        ParseError::Syntax(SyntaxError::new(&[TokenKind::Day], TokenKind::Date, 41))
    );
}

#[test]
fn test_sample_06_single_digit_hour() {
    let error = HouSamples::sample(6).parse_error();
    assert!(matches!(error, ParseError::Lex(_)));
    assert_eq!(error.offset(), 16);
}

#[test]
fn test_sample_07_date_shapes() {
    let file = HouSamples::sample(7).parse();

    assert_ast(&file)
        .week_count(2)
        .week(0, |week| {
            week.date("2024-1-8").days(&["mon"]);
        })
        .week(1, |week| {
            week.date("2024-12-30-1")
                .days(&["sun", "sat"])
                .day_line(1, |line| {
                    line.start("99:99").end("00:00");
                });
        });

    assert_eq!(file.weeks[1].date.parts(), vec!["2024", "12", "30", "1"]);
    assert_eq!(file.weeks[1].day_lines[1].start.parts(), ("99", "99"));
}

#[test]
fn test_every_valid_sample_round_trips() {
    for (number, path) in HouSamples::all().unwrap() {
        let source = std::fs::read_to_string(&path).unwrap();
        if let Ok(tokens) = houlang_parser::houlang::lexing::tokenize(&source) {
            assert_eq!(
                detokenize(&source, &tokens),
                source,
                "sample #{} does not round-trip",
                number
            );
        }
    }
}
