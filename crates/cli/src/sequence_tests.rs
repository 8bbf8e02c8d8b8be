// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use proptest::prelude::*;
use rstest::rstest;
use yare::parameterized;

fn values(start: u64, end: u64, step: u64) -> Vec<u64> {
    SequenceSpec::new(start, end, step).unwrap().iter().collect()
}

#[test]
fn ascending_by_one() {
    assert_eq!(values(1, 5, 1), vec![1, 2, 3, 4, 5]);
}

#[test]
fn descending_by_two() {
    assert_eq!(values(5, 1, 2), vec![5, 3, 1]);
}

#[rstest]
#[case(0, 10, 3, vec![0, 3, 6, 9])]
#[case(7, 7, 1, vec![7])]
#[case(7, 7, 100, vec![7])]
#[case(10, 0, 3, vec![10, 7, 4, 1])]
#[case(3, 0, 5, vec![3])]
#[case(1, 0, 1, vec![1, 0])]
#[case(2, 0, 1, vec![2, 1, 0])]
#[case(u64::MAX - 2, u64::MAX, 1, vec![u64::MAX - 2, u64::MAX - 1, u64::MAX])]
#[case(u64::MAX - 2, u64::MAX, 2, vec![u64::MAX - 2, u64::MAX])]
#[case(u64::MAX, u64::MAX - 1, u64::MAX, vec![u64::MAX])]
#[case(u64::MAX, 0, u64::MAX, vec![u64::MAX, 0])]
#[case(5, u64::MAX, u64::MAX, vec![5])]
fn edge_sequences(
    #[case] start: u64,
    #[case] end: u64,
    #[case] step: u64,
    #[case] expected: Vec<u64>,
) {
    assert_eq!(values(start, end, step), expected);
}

#[test]
fn direction_is_derived() {
    let up = SequenceSpec::new(1, 5, 1).unwrap();
    let down = SequenceSpec::new(5, 1, 1).unwrap();
    let flat = SequenceSpec::new(3, 3, 1).unwrap();
    assert_eq!(up.direction(), Direction::Ascending);
    assert_eq!(down.direction(), Direction::Descending);
    assert_eq!(flat.direction(), Direction::Ascending);
}

#[test]
fn zero_step_is_rejected() {
    assert_eq!(SequenceSpec::new(1, 5, 0), Err(RangeArgsError::ZeroStep));
}

#[test]
fn iteration_is_restartable() {
    let spec = SequenceSpec::new(1, 3, 1).unwrap();
    let first: Vec<u64> = spec.iter().collect();
    let second: Vec<u64> = (&spec).into_iter().collect();
    assert_eq!(first, second);
}

#[test]
fn exhausted_iterator_stays_exhausted() {
    let mut seq = SequenceSpec::new(0, 0, 1).unwrap().iter();
    assert_eq!(seq.next(), Some(0));
    assert_eq!(seq.next(), None);
    assert_eq!(seq.next(), None);
}

#[rstest]
#[case(&["5"], SequenceSpec::new(1, 5, 1))]
#[case(&["3", "9"], SequenceSpec::new(3, 9, 1))]
#[case(&["9", "3", "2"], SequenceSpec::new(9, 3, 2))]
#[case(&["0x10", "0x20", "0b100"], SequenceSpec::new(16, 32, 4))]
#[case(&["U+41", "U+5A"], SequenceSpec::new(65, 90, 1))]
fn from_numeric_args(
    #[case] args: &[&str],
    #[case] expected: Result<SequenceSpec, RangeArgsError>,
) {
    assert_eq!(
        SequenceSpec::from_args(args, InputMode::Numeric, codec::AUTO_BASE),
        expected
    );
}

#[test]
fn from_args_uses_input_base() {
    let spec = SequenceSpec::from_args(&["10", "ff", "10"], InputMode::Numeric, 16).unwrap();
    assert_eq!((spec.start, spec.end, spec.step()), (16, 255, 16));
}

#[test]
fn from_character_args() {
    let spec = SequenceSpec::from_args(&["a", "e", "2"], InputMode::Character, 0).unwrap();
    assert_eq!(spec.iter().collect::<Vec<_>>(), vec![97, 99, 101]);
}

#[test]
fn single_character_arg_counts_up_from_one() {
    let spec = SequenceSpec::from_args(&["\u{5}"], InputMode::Character, 0).unwrap();
    assert_eq!(spec.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
}

#[parameterized(
    none = { &[], RangeArgsError::Missing },
    too_many = { &["1", "2", "3", "4"], RangeArgsError::TooMany },
    bad_max = { &["x"], RangeArgsError::NotANumber(RangeArg::Upper, "x".into()) },
    bad_min = { &["x", "5"], RangeArgsError::NotANumber(RangeArg::Lower, "x".into()) },
    bad_step = { &["1", "5", "-1"], RangeArgsError::NotANumber(RangeArg::Step, "-1".into()) },
    zero_step = { &["1", "5", "0"], RangeArgsError::ZeroStep },
    huge_max = {
        &["18446744073709551616"],
        RangeArgsError::OutOfRange(RangeArg::Upper, "18446744073709551616".into())
    },
)]
fn numeric_arg_errors(args: &[&str], expected: RangeArgsError) {
    assert_eq!(
        SequenceSpec::from_args(args, InputMode::Numeric, 0).unwrap_err(),
        expected
    );
}

#[parameterized(
    long_lower = { &["ab", "z"], RangeArg::Lower },
    long_upper = { &["a", "yz"], RangeArg::Upper },
    empty_upper = { &[""], RangeArg::Upper },
)]
fn character_endpoints_must_be_single(args: &[&str], arg: RangeArg) {
    let err = SequenceSpec::from_args(args, InputMode::Character, 0).unwrap_err();
    assert_eq!(err, RangeArgsError::NotOneCharacter(arg));
    assert!(err.to_string().ends_with("contains more than one character"));
}

proptest! {
    #[test]
    fn ascending_count_and_bounds(start in any::<u64>(), len in 0u64..10_000, step in 1u64..500) {
        let end = start.saturating_add(len);
        let spec = SequenceSpec::new(start, end, step).unwrap();
        let out: Vec<u64> = spec.iter().collect();

        prop_assert_eq!(out.len() as u64, (end - start) / step + 1);
        prop_assert_eq!(out.len() as u128, spec.value_count());
        prop_assert_eq!(out[0], start);
        let last = *out.last().unwrap();
        prop_assert!(last <= end);
        prop_assert!(last.checked_add(step).map_or(true, |n| n > end));
        prop_assert!(out.windows(2).all(|w| w[1] - w[0] == step));
    }

    #[test]
    fn descending_count_and_bounds(end in any::<u64>(), len in 1u64..10_000, step in 1u64..500) {
        let start = end.saturating_add(len);
        prop_assume!(start > end);
        let spec = SequenceSpec::new(start, end, step).unwrap();
        let out: Vec<u64> = spec.iter().collect();

        prop_assert_eq!(out.len() as u64, (start - end) / step + 1);
        prop_assert_eq!(out[0], start);
        let last = *out.last().unwrap();
        prop_assert!(last >= end);
        prop_assert!(last - end < step);
        prop_assert!(out.windows(2).all(|w| w[0] - w[1] == step));
    }

    #[test]
    fn descending_to_zero_never_underflows(start in 1u64..1_000, step in 1u64..5_000) {
        let out: Vec<u64> = SequenceSpec::new(start, 0, step).unwrap().iter().collect();
        prop_assert_eq!(out.len() as u64, start / step + 1);
        prop_assert!(out.iter().all(|v| *v <= start));
    }

    #[test]
    fn huge_steps_terminate(start in any::<u64>(), end in any::<u64>(), step in (u64::MAX / 2)..=u64::MAX) {
        let spec = SequenceSpec::new(start, end, step).unwrap();
        prop_assert!(spec.iter().count() <= 3);
        prop_assert_eq!(spec.iter().count() as u128, spec.value_count());
    }
}
