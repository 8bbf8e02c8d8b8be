// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Range mode: print an arithmetic sequence.

use std::io::Write;

use crate::codec::{self, OutputSpec};
use crate::error::CipError;
use crate::sequence::SequenceSpec;

use super::{Emitter, Runtime};

/// The output spec a range is rendered with.
///
/// With `constant_width` every value shares the field width of the widest
/// endpoint, so the column lines up.
pub fn range_output(spec: &SequenceSpec, output: &OutputSpec, constant_width: bool) -> OutputSpec {
    let mut output = output.clone();
    if constant_width {
        output.width = codec::field_width(spec.widest_endpoint(), &output);
    }
    output
}

/// Lazily render every value of `spec`.
pub fn rendered_range<'a>(
    spec: &SequenceSpec,
    output: &'a OutputSpec,
) -> impl Iterator<Item = String> + 'a {
    spec.iter().map(move |value| codec::render(value, output))
}

impl Runtime {
    pub(super) fn run_range<W: Write>(&self, out: &mut W) -> Result<(), CipError> {
        let config = &self.config;
        let spec = SequenceSpec::from_args(&config.args, config.input_mode, config.input_base)?;
        let output = range_output(&spec, &config.output, config.constant_width);
        tracing::debug!(
            start = spec.start,
            end = spec.end,
            step = spec.step(),
            direction = ?spec.direction(),
            count = %spec.value_count(),
            width = output.width,
            "generating range"
        );

        let mut emitter = Emitter::new(out, &config.separator);
        for text in rendered_range(&spec, &output) {
            emitter.emit(&text)?;
        }
        emitter.finish(config.trailing_newline)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "range_tests.rs"]
mod tests;
