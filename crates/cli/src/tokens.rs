// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input tokenization.
//!
//! Stdin and command-line arguments feed the same [`TokenStream`]; the two
//! constructors differ only in their source. Input is consumed one line at a
//! time, so tokens are produced as soon as their line arrives.

use std::collections::VecDeque;
use std::io::{self, BufRead, Cursor};

use crate::codec;
use crate::error::ParseError;

/// How input tokens are interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Whitespace-separated numerals.
    #[default]
    Numeric,
    /// Individual characters, each standing for its code point.
    Character,
}

impl InputMode {
    pub fn split_mode(self) -> SplitMode {
        match self {
            InputMode::Numeric => SplitMode::Words,
            InputMode::Character => SplitMode::Runes,
        }
    }

    /// String placed between joined command-line arguments.
    fn arg_joiner(self) -> &'static str {
        match self {
            InputMode::Numeric => " ",
            InputMode::Character => "",
        }
    }

    /// Value of a token under this mode.
    pub fn value_of(self, token: &str, base: u32) -> Result<u64, ParseError> {
        match self {
            InputMode::Character => token
                .chars()
                .next()
                .map(|c| u64::from(u32::from(c)))
                .ok_or_else(|| ParseError::syntax(token, base)),
            InputMode::Numeric => codec::parse(token, base),
        }
    }
}

/// Rule for splitting input text into tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitMode {
    /// Runs of non-whitespace.
    Words,
    /// Every character, whitespace included.
    Runes,
}

/// Lazy stream of tokens over a line-oriented reader.
pub struct TokenStream<R> {
    reader: R,
    split: SplitMode,
    pending: VecDeque<String>,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> TokenStream<R> {
    pub fn from_reader(reader: R, split: SplitMode) -> Self {
        Self {
            reader,
            split,
            pending: VecDeque::new(),
            buf: Vec::new(),
            done: false,
        }
    }

    /// Read one more line into `pending`. Returns `false` at end of input.
    fn fill(&mut self) -> io::Result<bool> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(false);
        }

        let line = String::from_utf8_lossy(&self.buf);
        match self.split {
            SplitMode::Words => self
                .pending
                .extend(line.split_whitespace().map(str::to_string)),
            SplitMode::Runes => self.pending.extend(line.chars().map(String::from)),
        }
        Ok(true)
    }
}

impl TokenStream<Cursor<String>> {
    /// Tokens from command-line arguments, joined the way `mode` requires.
    pub fn from_args<S: AsRef<str>>(args: &[S], mode: InputMode) -> Self {
        let joined = args
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(mode.arg_joiner());
        Self::from_reader(Cursor::new(joined), mode.split_mode())
    }
}

impl<R: BufRead> Iterator for TokenStream<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }
            if self.done {
                return None;
            }
            match self.fill() {
                Ok(true) => {}
                Ok(false) => self.done = true,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tokens_tests.rs"]
mod tests;
