// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy shared by the codec, the separator resolver, the range
//! engine and the driver.
//!
//! Every error is fatal to a run. The driver maps them onto exit codes with
//! [`CipError::exit_code`].

use thiserror::Error;

use crate::config::ConfigError;

/// Exit code for data and usage errors.
pub const EXIT_USAGE: i32 = 2;

/// Exit code for I/O failures on stdin/stdout.
pub const EXIT_IO: i32 = 1;

/// Why a token could not be turned into a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Not a numeral under the resolved base.
    Syntax,
    /// A numeral, but wider than 64 bits.
    Range,
}

/// A token that failed to parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub token: String,
    /// Effective base the token was read in (10 when auto-detection found no prefix).
    pub base: u32,
}

impl ParseError {
    pub fn syntax(token: impl Into<String>, base: u32) -> Self {
        Self {
            kind: ParseErrorKind::Syntax,
            token: token.into(),
            base,
        }
    }

    pub fn range(token: impl Into<String>, base: u32) -> Self {
        Self {
            kind: ParseErrorKind::Range,
            token: token.into(),
            base,
        }
    }

    pub fn is_range(&self) -> bool {
        self.kind == ParseErrorKind::Range
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ParseErrorKind::Syntax => write!(f, "cannot convert '{}' to a number", self.token),
            ParseErrorKind::Range => {
                write!(f, "base {} number '{}' out of range", self.base, self.token)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// A separator string with a malformed escape sequence.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("bad character(s) in separator")]
pub struct EscapeError {
    pub separator: String,
    pub reason: String,
}

/// Which positional argument of a range request is at fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeArg {
    Lower,
    Upper,
    Step,
}

impl std::fmt::Display for RangeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeArg::Lower => f.write_str("range lower limit"),
            RangeArg::Upper => f.write_str("range upper limit"),
            RangeArg::Step => f.write_str("range step"),
        }
    }
}

/// Malformed positional arguments for range mode.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RangeArgsError {
    #[error("too many arguments for -r option")]
    TooMany,

    #[error("need argument(s) for -r option")]
    Missing,

    #[error("{0} '{1}' is not a number")]
    NotANumber(RangeArg, String),

    #[error("{0} '{1}' is out of range")]
    OutOfRange(RangeArg, String),

    #[error("{0} contains more than one character")]
    NotOneCharacter(RangeArg),

    #[error("range step must be greater than zero")]
    ZeroStep,
}

impl RangeArgsError {
    /// Attribute a codec failure to a range argument.
    pub fn from_parse(arg: RangeArg, err: ParseError) -> Self {
        match err.kind {
            ParseErrorKind::Syntax => RangeArgsError::NotANumber(arg, err.token),
            ParseErrorKind::Range => RangeArgsError::OutOfRange(arg, err.token),
        }
    }
}

/// Top-level error returned by the driver.
#[derive(Debug, Error)]
pub enum CipError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Escape(#[from] EscapeError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    RangeArgs(#[from] RangeArgsError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl CipError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CipError::Io(_) => EXIT_IO,
            _ => EXIT_USAGE,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
