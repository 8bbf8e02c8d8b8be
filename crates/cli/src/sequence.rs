// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Arithmetic sequences over unsigned 64-bit values.
//!
//! Direction is derived from the endpoints: a start above the end counts
//! down. Neither direction ever wraps: ascending stops before `current + step`
//! overflows, and descending decides termination with an addition
//! (`current < end + step`) so `current - step` is only computed when it
//! cannot underflow.

use crate::codec;
use crate::error::{RangeArg, RangeArgsError};
use crate::tokens::InputMode;

/// Which way a sequence counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// A validated range request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceSpec {
    pub start: u64,
    pub end: u64,
    step: u64,
}

impl SequenceSpec {
    /// Build a spec; the step must be positive.
    pub fn new(start: u64, end: u64, step: u64) -> Result<Self, RangeArgsError> {
        if step == 0 {
            return Err(RangeArgsError::ZeroStep);
        }
        Ok(Self { start, end, step })
    }

    /// Build a spec from `[min] max [step]` positional arguments.
    ///
    /// With one argument the sequence starts at 1; the step defaults to 1.
    /// In character mode each endpoint must be a single character and stands
    /// for its code point, while the step stays a number in `base`.
    pub fn from_args<S: AsRef<str>>(
        args: &[S],
        mode: InputMode,
        base: u32,
    ) -> Result<Self, RangeArgsError> {
        let endpoint = |arg: RangeArg, text: &str| match mode {
            InputMode::Character => single_char(arg, text),
            InputMode::Numeric => number(arg, text, base),
        };

        match args {
            [] => Err(RangeArgsError::Missing),
            [max] => Self::new(1, endpoint(RangeArg::Upper, max.as_ref())?, 1),
            [min, max] => Self::new(
                endpoint(RangeArg::Lower, min.as_ref())?,
                endpoint(RangeArg::Upper, max.as_ref())?,
                1,
            ),
            [min, max, step] => Self::new(
                endpoint(RangeArg::Lower, min.as_ref())?,
                endpoint(RangeArg::Upper, max.as_ref())?,
                number(RangeArg::Step, step.as_ref(), base)?,
            ),
            _ => Err(RangeArgsError::TooMany),
        }
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn direction(&self) -> Direction {
        if self.start > self.end {
            Direction::Descending
        } else {
            Direction::Ascending
        }
    }

    /// The endpoint with the larger magnitude, which also renders widest.
    pub fn widest_endpoint(&self) -> u64 {
        self.start.max(self.end)
    }

    /// Number of values [`iter`](Self::iter) yields.
    pub fn value_count(&self) -> u128 {
        let span = self.start.abs_diff(self.end);
        u128::from(span / self.step) + 1
    }

    /// A fresh iterator over the sequence.
    pub fn iter(&self) -> Sequence {
        Sequence {
            next: Some(self.start),
            end: self.end,
            step: self.step,
            direction: self.direction(),
        }
    }
}

impl IntoIterator for &SequenceSpec {
    type Item = u64;
    type IntoIter = Sequence;

    fn into_iter(self) -> Sequence {
        self.iter()
    }
}

/// Lazy iterator over a [`SequenceSpec`].
#[derive(Clone, Debug)]
pub struct Sequence {
    next: Option<u64>,
    end: u64,
    step: u64,
    direction: Direction,
}

impl Iterator for Sequence {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.next?;
        self.next = match self.direction {
            Direction::Ascending => current
                .checked_add(self.step)
                .filter(|next| *next <= self.end),
            Direction::Descending => match self.end.checked_add(self.step) {
                Some(floor) if current >= floor => Some(current - self.step),
                _ => None,
            },
        };
        Some(current)
    }
}

impl std::iter::FusedIterator for Sequence {}

fn number(arg: RangeArg, text: &str, base: u32) -> Result<u64, RangeArgsError> {
    codec::parse(text, base).map_err(|e| RangeArgsError::from_parse(arg, e))
}

fn single_char(arg: RangeArg, text: &str) -> Result<u64, RangeArgsError> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(u64::from(u32::from(c))),
        _ => Err(RangeArgsError::NotOneCharacter(arg)),
    }
}

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod tests;
