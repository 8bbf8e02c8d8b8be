// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output helpers for consistent error/warning formatting.
//!
//! Messages are tagged with the program name. Color is used only when stderr
//! is a terminal and `NO_COLOR` is unset.

use std::io::{self, IsTerminal, Write};

use crate::env;

/// Program name used to tag diagnostics.
pub const PROGRAM: &str = "cip";

fn use_color() -> bool {
    io::stderr().is_terminal() && !env::no_color()
}

/// Print an error message to stderr.
///
/// Displays in red when color is enabled, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display) {
    write_error(&mut io::stderr(), msg, use_color());
}

/// Write an error message to a writer with explicit color flag.
fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display, color: bool) {
    if color {
        let _ = writeln!(writer, "\x1b[31m{PROGRAM}: {msg}\x1b[0m");
    } else {
        let _ = writeln!(writer, "{PROGRAM}: {msg}");
    }
}

/// Print a warning message to stderr.
///
/// Displays in yellow when color is enabled, plain text otherwise.
pub fn print_warning(msg: impl std::fmt::Display) {
    write_warning(&mut io::stderr(), msg, use_color());
}

/// Write a warning message to a writer with explicit color flag.
fn write_warning<W: Write>(writer: &mut W, msg: impl std::fmt::Display, color: bool) {
    if color {
        let _ = writeln!(writer, "\x1b[33m{PROGRAM}: warning: {msg}\x1b[0m");
    } else {
        let _ = writeln!(writer, "{PROGRAM}: warning: {msg}");
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
