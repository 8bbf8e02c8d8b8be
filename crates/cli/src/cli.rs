// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.
//!
//! Multi-letter options are also accepted in single-dash form (`-ib=16`,
//! `-width 4`); [`normalize_args`] rewrites them before clap sees them.
//! Option parsing stops at the first positional argument, so `cip 5 -1`
//! treats `-1` as input.

use std::ffi::OsString;

use clap::{ArgAction, Parser};

/// Options that may be spelled with a single dash.
const SINGLE_DASH_LONG: &[&str] = &["ib", "ob", "ic", "width", "help"];

/// Long options whose value may be the following argument.
const LONG_WITH_VALUE: &[&str] = &["ib", "ob", "width"];

/// Short options that take a value.
const SHORT_WITH_VALUE: &[char] = &['s', 'p'];

const USAGE: &str = "\
cip [OPTIONS]                          read input from standard input
       cip [OPTIONS] <ARGS>...                read input from arguments
       cip [OPTIONS] -r [MIN] <MAX> [STEP]    generate a sequence from MIN to MAX by intervals of STEP";

/// cip - Convert Integer and Print
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "cip",
    version,
    about = "cip - Convert Integer and Print",
    override_usage = USAGE,
    disable_help_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// Print this help message
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Output binary numbers
    #[arg(short = 'b')]
    pub binary: bool,

    /// Output octal numbers (with a leading 0)
    #[arg(short = 'o')]
    pub octal: bool,

    /// Output hexadecimal numbers using a-f (with 0x)
    #[arg(short = 'h', visible_short_alias = 'x')]
    pub hex_lower: bool,

    /// Output hexadecimal numbers using A-F (with 0X)
    #[arg(short = 'H', visible_short_alias = 'X')]
    pub hex_upper: bool,

    /// Output numbers in Unicode notation (for example, U+006A)
    #[arg(short = 'U')]
    pub unicode: bool,

    /// Output Unicode characters
    #[arg(short = 'c')]
    pub chars: bool,

    /// Print a range of numbers: [MIN] MAX [STEP]
    #[arg(short = 'r')]
    pub range: bool,

    /// Input base: 2-36, or 0 to detect from the prefix (0x, 0o, 0b, 0)
    #[arg(long = "ib", value_name = "BASE", default_value_t = 0)]
    pub input_base: u32,

    /// Output base: 2, 8, 10, or 16 (no prefix)
    #[arg(long = "ob", value_name = "BASE")]
    pub output_base: Option<u32>,

    /// Unicode character input
    #[arg(long = "ic")]
    pub char_input: bool,

    /// Constant width output (fitting the widest endpoint), padded with leading 0s
    #[arg(short = 'w')]
    pub constant_width: bool,

    /// Constant width output, padded with leading 0s
    #[arg(
        long,
        value_name = "WIDTH",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub width: i64,

    /// Separator string (escapes such as \n and \t are processed)
    #[arg(short = 's', value_name = "SEPARATOR", allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// Numeric prefix (0, 0x, U+, ...)
    #[arg(
        short = 'p',
        value_name = "PREFIX",
        default_value = "",
        allow_hyphen_values = true
    )]
    pub prefix: String,

    /// Don't print a newline after the output (requires -c)
    #[arg(short = 'n')]
    pub no_newline: bool,

    /// Numbers to convert, or the range limits with -r
    #[arg(value_name = "ARGS", trailing_var_arg = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Parse the process arguments, accepting single-dash long options.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Fallible variant of [`parse_normalized`](Self::parse_normalized) over explicit arguments.
    pub fn try_parse_normalized<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }
}

/// Rewrite `-ib`, `-ob`, `-ic`, `-width` and `-help` (optionally with
/// `=value`) to their double-dash spelling. The program name, option values,
/// and everything from `--` or the first positional argument on are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    let mut value_next = false;

    for (i, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if i == 0 || passthrough {
            out.push(arg);
            continue;
        }
        if value_next {
            value_next = false;
            out.push(arg);
            continue;
        }
        if arg == "--" || !is_option(&arg) {
            passthrough = true;
            out.push(arg);
            continue;
        }
        let arg = rewrite_single_dash(arg);
        value_next = takes_next_value(&arg);
        out.push(arg);
    }

    out
}

fn is_option(arg: &OsString) -> bool {
    arg.to_str()
        .is_some_and(|text| text.len() > 1 && text.starts_with('-'))
}

/// Whether the argument after `arg` is its value rather than a new option.
fn takes_next_value(arg: &OsString) -> bool {
    let Some(text) = arg.to_str() else {
        return false;
    };
    if let Some(name) = text.strip_prefix("--") {
        return LONG_WITH_VALUE.contains(&name);
    }
    let cluster = text.trim_start_matches('-');
    // In a cluster like `-rs`, only a value option in last place reads ahead.
    for (i, c) in cluster.char_indices() {
        if SHORT_WITH_VALUE.contains(&c) {
            return i + c.len_utf8() == cluster.len();
        }
    }
    false
}

fn rewrite_single_dash(arg: OsString) -> OsString {
    let Some(text) = arg.to_str() else {
        return arg;
    };
    let Some(body) = text.strip_prefix('-') else {
        return arg;
    };
    if body.starts_with('-') {
        return arg;
    }
    let name = body.split_once('=').map_or(body, |(name, _)| name);
    if SINGLE_DASH_LONG.contains(&name) {
        OsString::from(format!("-{text}"))
    } else {
        arg
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
