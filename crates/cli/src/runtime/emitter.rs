// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Separator placement.

use std::io::{self, Write};

/// Writes values with the separator between them, never before the first.
pub struct Emitter<'a, W> {
    out: &'a mut W,
    separator: &'a str,
    printed: bool,
}

impl<'a, W: Write> Emitter<'a, W> {
    pub fn new(out: &'a mut W, separator: &'a str) -> Self {
        Self {
            out,
            separator,
            printed: false,
        }
    }

    pub fn emit(&mut self, text: &str) -> io::Result<()> {
        if self.printed {
            self.out.write_all(self.separator.as_bytes())?;
        }
        self.out.write_all(text.as_bytes())?;
        self.printed = true;
        Ok(())
    }

    /// Terminate a partially written line before a diagnostic is reported.
    pub fn break_line(&mut self) -> io::Result<()> {
        if self.printed {
            self.out.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Finish the run, writing the trailing newline if requested.
    pub fn finish(self, trailing_newline: bool) -> io::Result<()> {
        if trailing_newline {
            self.out.write_all(b"\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "emitter_tests.rs"]
mod tests;
