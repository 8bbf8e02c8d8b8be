// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::super::test_helpers::{output, run};
use super::*;
use crate::error::{ParseError, ParseErrorKind};
use crate::tokens::SplitMode;
use rstest::rstest;
use std::io::Cursor;

#[rstest]
#[case(&["1", "2", "3"], "1\n2\n3\n")]
#[case(&["-h", "255", "16"], "0xff\n0x10\n")]
#[case(&["-X", "255"], "0XFF\n")]
#[case(&["-ob=16", "255"], "ff\n")]
#[case(&["-H", "-ob=16", "255"], "FF\n")]
#[case(&["-o", "8", "0"], "010\n0\n")]
#[case(&["-ob=8", "8"], "10\n")]
#[case(&["-b", "5"], "101\n")]
#[case(&["-U", "65", "0x1F600"], "U+0041\nU+1F600\n")]
#[case(&["-c", "72", "105"], "Hi\n")]
#[case(&["-s", ", ", "1", "2", "3"], "1, 2, 3\n")]
#[case(&["-s", ",", "1", "2", "3"], "1,2,3\n")]
#[case(&["-s", r"\t", "1", "2"], "1\t2\n")]
#[case(&["-p", "#", "-width=3", "7"], "#007\n")]
#[case(&["-h", "-width=4", "255"], "0x00ff\n")]
#[case(&["-ib=16", "ff", "10"], "255\n16\n")]
#[case(&["-ib=36", "zz"], "1295\n")]
#[case(&["U+0041", "0b11", "017"], "65\n3\n15\n")]
#[case(&["1 2", "3"], "1\n2\n3\n")]
fn converts_arguments(#[case] args: &[&str], #[case] expected: &str) {
    assert_eq!(output(args, ""), expected);
}

#[rstest]
#[case(&["-ic", "AB"], "65\n66\n")]
#[case(&["-ic", "-h", "A", "B"], "0x41\n0x42\n")]
#[case(&["-ic", "-U", "é"], "U+00E9\n")]
#[case(&["-ic", "-c", "hi", "!"], "hi!\n")]
#[case(&["-ic", "a b"], "97\n32\n98\n")]
fn converts_character_arguments(#[case] args: &[&str], #[case] expected: &str) {
    assert_eq!(output(args, ""), expected);
}

#[test]
fn reads_stdin_words_across_lines() {
    assert_eq!(output(&[], "10 0x10\n  010\n\n"), "10\n16\n8\n");
}

#[test]
fn reads_stdin_runes_including_newlines() {
    assert_eq!(output(&["-ic"], "A\n"), "65\n10\n");
}

#[test]
fn character_output_from_stdin_has_no_trailing_newline() {
    assert_eq!(output(&["-c"], "72 105"), "Hi");
}

#[test]
fn character_round_trip_reproduces_text() {
    assert_eq!(output(&["-ic", "-c"], "héllo\nworld\n"), "héllo\nworld\n");
}

#[test]
fn no_newline_flag_suppresses_trailing_newline() {
    assert_eq!(output(&["-c", "-n", "65", "66"], ""), "AB");
}

#[test]
fn empty_stdin_prints_only_newline() {
    assert_eq!(output(&[], ""), "\n");
}

#[test]
fn arguments_take_precedence_over_stdin() {
    assert_eq!(output(&["5"], "6 7"), "5\n");
}

#[test]
fn first_bad_token_stops_the_run() {
    let (result, out) = run(&["1", "x", "3"], "");
    assert_eq!(out, "1\n");
    match result {
        Err(CipError::Parse(e)) => {
            assert_eq!(e.kind, ParseErrorKind::Syntax);
            assert_eq!(e.token, "x");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn bad_first_token_writes_nothing() {
    let (result, out) = run(&[], "nope 1 2");
    assert_eq!(out, "");
    assert!(matches!(result, Err(CipError::Parse(_))));
}

#[test]
fn partial_line_is_terminated_before_failure() {
    let (result, out) = run(&["-s", " ", "1", "2", "99999999999999999999"], "");
    assert_eq!(out, "1 2\n");
    match result {
        Err(CipError::Parse(e)) => assert!(e.is_range()),
        other => panic!("expected range error, got {other:?}"),
    }
}

#[test]
fn conversions_end_after_first_error() {
    let output_spec = OutputSpec::default();
    let tokens = TokenStream::from_reader(Cursor::new("1 bad 2"), SplitMode::Words);
    let items: Vec<_> = Conversions::new(tokens, InputMode::Numeric, 0, &output_spec).collect();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].as_ref().unwrap(), "1");
    assert!(matches!(
        &items[1],
        Err(CipError::Parse(ParseError { kind: ParseErrorKind::Syntax, .. }))
    ));
}
