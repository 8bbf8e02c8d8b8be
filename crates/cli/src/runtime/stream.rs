// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stream mode: convert each input token independently.

use std::io::{BufRead, Write};

use crate::codec::{self, OutputSpec};
use crate::error::CipError;
use crate::tokens::{InputMode, TokenStream};

use super::{Emitter, Runtime};

/// Rendered text for each token, in arrival order.
///
/// Yields the first read or parse failure and then ends.
pub struct Conversions<'a, R> {
    tokens: TokenStream<R>,
    mode: InputMode,
    base: u32,
    output: &'a OutputSpec,
    failed: bool,
}

impl<'a, R: BufRead> Conversions<'a, R> {
    pub fn new(tokens: TokenStream<R>, mode: InputMode, base: u32, output: &'a OutputSpec) -> Self {
        Self {
            tokens,
            mode,
            base,
            output,
            failed: false,
        }
    }

    fn convert(&self, token: &str) -> Result<String, CipError> {
        let value = self.mode.value_of(token, self.base).inspect_err(|e| {
            tracing::debug!(token, kind = ?e.kind, base = e.base, "token rejected");
        })?;
        Ok(codec::render(value, self.output))
    }
}

impl<R: BufRead> Iterator for Conversions<'_, R> {
    type Item = Result<String, CipError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = match self.tokens.next()? {
            Ok(token) => self.convert(&token),
            Err(e) => Err(e.into()),
        };
        self.failed = item.is_err();
        Some(item)
    }
}

impl Runtime {
    pub(super) fn run_stream<R: BufRead, W: Write>(
        &self,
        tokens: TokenStream<R>,
        out: &mut W,
    ) -> Result<(), CipError> {
        let config = &self.config;
        let mut emitter = Emitter::new(out, &config.separator);
        let mut count = 0u64;

        for item in Conversions::new(tokens, config.input_mode, config.input_base, &config.output) {
            match item {
                Ok(text) => emitter.emit(&text)?,
                Err(e) => {
                    emitter.break_line()?;
                    return Err(e);
                }
            }
            count += 1;
        }

        emitter.finish(config.trailing_newline)?;
        tracing::debug!(count, "stream finished");
        Ok(())
    }
}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
