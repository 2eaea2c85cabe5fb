//! Tokenizer behavior through the public lexing API

use houlang_parser::houlang::lexing::{next_token, tokenize, LexError, Tokenizer};
use houlang_parser::houlang::token::{Token, TokenKind};
use rstest::rstest;

use TokenKind::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[rstest]
#[case::empty("", vec![End])]
#[case::blank(" \t\r\n  ", vec![End])]
#[case::date("2024-01-15", vec![Date, End])]
#[case::long_date("2024-1-2-3", vec![Date, End])]
#[case::day_line("mon: 08:00 - 17:00", vec![Day, Colon, Hour, Dash, Hour, End])]
#[case::spaces_before_colon("mon   : 08:00", vec![Day, Colon, Hour, End])]
#[case::spaces_before_dash("08:00    - 09:00", vec![Hour, Dash, Hour, End])]
#[case::no_newlines("2024-01-15 mon: 08:00 - 17:00", vec![Date, Day, Colon, Hour, Dash, Hour, End])]
#[case::any_lowercase_word("someday", vec![Day, End])]
fn test_token_kinds(#[case] source: &str, #[case] expected: Vec<TokenKind>) {
    assert_eq!(kinds(source), expected);
}

#[rstest]
#[case::four_digits_then_colon("2024:01", 0)]
#[case::uppercase("Mon", 0)]
#[case::single_digit_hour("mon: 8:00", 5)]
#[case::punctuation("mon: 08:00 # note", 11)]
#[case::non_ascii("2024-01-15\nlün", 12)]
fn test_lex_error_offsets(#[case] source: &str, #[case] offset: usize) {
    let error = tokenize(source).unwrap_err();
    assert_eq!(error.offset, offset);
}

#[test]
fn test_literal_tokens_include_folded_spaces() {
    let source = "mon  : 08:00  - 17:00";
    let tokens = tokenize(source).unwrap();
    let texts: Vec<&str> = tokens.iter().map(|token| token.text(source)).collect();
    assert_eq!(texts, vec!["mon", "  : ", "08:00", "  - ", "17:00", ""]);
}

#[test]
fn test_cursor_contract_matches_stream() {
    let source = "2024-01-15\nmon: 08:00 - 17:00\n\ntue: 09:00 - 18:00\n";
    let expected = tokenize(source).unwrap();

    let mut cursor = 0;
    let mut produced = Vec::new();
    loop {
        let (token, next) = next_token(source, cursor).unwrap();
        assert!(next >= cursor, "cursor moved backwards");
        cursor = next;
        let done = token.kind == End;
        produced.push(token);
        if done {
            break;
        }
    }

    assert_eq!(produced, expected);
    assert_eq!(cursor, source.len());
}

#[test]
fn test_end_repeats_at_end_of_input() {
    let source = "2024-01-15\n";
    assert_eq!(next_token(source, 10).unwrap(), (Token::end(11), 11));
    assert_eq!(next_token(source, 11).unwrap(), (Token::end(11), 11));
}

#[test]
fn test_cursor_out_of_bounds() {
    assert_eq!(next_token("mon", 4).unwrap_err(), LexError::new(4, ""));
}

#[test]
fn test_tokenizer_is_lazy() {
    // The error after the first day line is not reached until asked for
    let mut tokenizer = Tokenizer::new("mon: 08:00 - 17:00 %%%");
    for _ in 0..5 {
        assert!(tokenizer.next_token().is_ok());
    }
    assert_eq!(tokenizer.cursor(), 18);
    assert_eq!(tokenizer.next_token().unwrap_err().offset, 19);
}
