// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Cursor;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::CipError;

use super::Runtime;

/// Build a runtime from command-line arguments (without the program name).
pub fn runtime(args: &[&str]) -> Runtime {
    let cli = Cli::try_parse_normalized(std::iter::once("cip").chain(args.iter().copied()))
        .expect("arguments should parse");
    Runtime::new(Config::from_cli(&cli).expect("configuration should be valid"))
}

/// Run with `stdin` as input, returning the result and everything written.
pub fn run(args: &[&str], stdin: &str) -> (Result<(), CipError>, String) {
    let runtime = runtime(args);
    let mut out = Vec::new();
    let result = runtime.run(Cursor::new(stdin.to_string()), &mut out);
    (result, String::from_utf8(out).unwrap())
}

/// Run expecting success and return stdout.
pub fn output(args: &[&str], stdin: &str) -> String {
    let (result, out) = run(args, stdin);
    if let Err(e) = result {
        panic!("run failed: {e}");
    }
    out
}
