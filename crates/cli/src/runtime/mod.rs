// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime module that wires configuration, input and output together.
//!
//! This module provides:
//! - [`Runtime`] - Runs one invocation in stream or range mode
//! - [`Emitter`] - Writes rendered values with separators between them
//! - [`Conversions`] - Lazily converts input tokens to rendered text
//! - [`rendered_range`] - Lazily renders a sequence

mod emitter;
mod range;
mod stream;
#[cfg(test)]
mod test_helpers;

use std::io::{BufRead, Write};

use crate::config::{Config, Mode};
use crate::error::CipError;
use crate::tokens::TokenStream;

pub use emitter::Emitter;
pub use range::{range_output, rendered_range};
pub use stream::Conversions;

/// Executes one run against a configuration.
#[derive(Clone, Debug)]
pub struct Runtime {
    config: Config,
}

impl Runtime {
    pub fn new(config: Config) -> Self {
        tracing::debug!(?config, "resolved configuration");
        Self { config }
    }

    /// Run to completion, writing everything to `out`.
    ///
    /// `stdin` is only read in stream mode without positional arguments.
    /// Processing stops at the first error; anything already written stays
    /// written.
    pub fn run<R: BufRead, W: Write>(&self, stdin: R, out: &mut W) -> Result<(), CipError> {
        let config = &self.config;
        match config.mode {
            Mode::Range => self.run_range(out),
            Mode::Stream if config.args.is_empty() => self.run_stream(
                TokenStream::from_reader(stdin, config.input_mode.split_mode()),
                out,
            ),
            Mode::Stream => {
                self.run_stream(TokenStream::from_args(&config.args, config.input_mode), out)
            }
        }
    }
}
