//! Parser acceptance and error reporting

use houlang_parser::houlang::ast::Position;
use houlang_parser::houlang::parsing::{parse_document, ParseError, Parser, SyntaxError};
use houlang_parser::houlang::testing::assert_ast;
use houlang_parser::houlang::token::TokenKind;
use rstest::rstest;

#[rstest]
#[case::empty("", 0)]
#[case::whitespace_only(" \n\t\r\n", 0)]
#[case::one_line("2024-01-15 mon: 08:00 - 17:00", 1)]
#[case::no_trailing_newline("2024-01-15\nmon: 08:00 - 17:00", 1)]
#[case::two_weeks("2024-01-15\nmon: 08:00 - 17:00\n2024-01-22\ntue: 08:00 - 17:00\n", 2)]
fn test_accepts(#[case] source: &str, #[case] weeks: usize) {
    let file = parse_document(source).unwrap();
    assert_ast(&file).week_count(weeks);
}

#[rstest]
#[case::day_line_before_date("mon: 08:00 - 17:00", &[TokenKind::Date, TokenKind::End], TokenKind::Day, 0)]
#[case::week_without_days("2024-01-15\n", &[TokenKind::Day], TokenKind::End, 11)]
#[case::date_after_date("2024-01-15\n2024-01-22\nmon: 08:00 - 17:00", &[TokenKind::Day], TokenKind::Date, 11)]
#[case::missing_colon("2024-01-15\nmon 08:00 - 17:00", &[TokenKind::Colon], TokenKind::Hour, 15)]
#[case::day_instead_of_hour("2024-01-15\nmon: mon - 17:00", &[TokenKind::Hour], TokenKind::Day, 16)]
#[case::missing_dash("2024-01-15\nmon: 08:00 17:00", &[TokenKind::Dash], TokenKind::Hour, 22)]
#[case::truncated_day_line("2024-01-15\nmon: 08:00 - 17:00 tue", &[TokenKind::Colon], TokenKind::End, 33)]
#[case::stray_hour("2024-01-15\nmon: 08:00 - 17:00\n17:00", &[TokenKind::Date, TokenKind::End], TokenKind::Hour, 30)]
fn test_syntax_errors(
    #[case] source: &str,
    #[case] expected: &[TokenKind],
    #[case] found: TokenKind,
    #[case] offset: usize,
) {
    let error = parse_document(source).unwrap_err();
    assert_eq!(
        error,
        ParseError::Syntax(SyntaxError::new(expected, found, offset))
    );
    assert_eq!(error.offset(), offset);
}

#[rstest]
#[case::colon_in_date("2024:01", 0)]
#[case::uppercase_day("2024-01-15\nMon: 08:00 - 17:00", 11)]
#[case::semicolon("2024-01-15\nmon; 08:00 - 17:00", 14)]
fn test_lex_errors(#[case] source: &str, #[case] offset: usize) {
    let error = parse_document(source).unwrap_err();
    assert!(matches!(error, ParseError::Lex(_)), "got {:?}", error);
    assert_eq!(error.offset(), offset);
}

#[test]
fn test_ranges_use_line_and_column() {
    let source = "2024-01-15\nmon: 08:00 - 17:00\ntue: 09:00 - 18:00\n";
    let file = Parser::new(source).unwrap().parse().unwrap();

    let week = &file.weeks[0];
    assert_eq!(week.range.start, Position::new(0, 0));
    assert_eq!(week.range.end, Position::new(2, 18));

    let tue = &week.day_lines[1];
    assert_eq!(tue.range.span, 30..48);
    assert_eq!(tue.start.range.start, Position::new(2, 5));
    assert_eq!(&source[tue.end.range.span.clone()], "18:00");
}

#[test]
fn test_reported_message() {
    let error = parse_document("2024-01-15\nmon 08:00 - 17:00").unwrap_err();
    assert_eq!(
        error.to_string(),
        "syntax error: expected \": \", found HOUR at byte 15"
    );
}

#[test]
fn test_parses_on_separate_threads() {
    let sources = [
        "2024-01-15\nmon: 08:00 - 17:00\n",
        "2024-01-22\ntue: 09:00 - 18:00\nwed: 09:00 - 18:00\n",
    ];
    let handles: Vec<_> = sources
        .into_iter()
        .map(|source| {
            std::thread::spawn(move || parse_document(source).map(|file| file.day_lines().count()))
        })
        .collect();
    let counts: Vec<usize> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().unwrap())
        .collect();
    assert_eq!(counts, vec![1, 2]);
}
