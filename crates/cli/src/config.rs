// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration.
//!
//! [`Config::from_cli`] validates the parsed command line once and produces
//! the immutable settings every other component reads.

use thiserror::Error;

use crate::cli::Cli;
use crate::codec::{OutputSpec, Renderer, AUTO_BASE, MAX_WIDTH};
use crate::error::CipError;
use crate::separator;
use crate::tokens::InputMode;

/// Invalid option combinations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("too many output bases specified - use only one of -b, -o, -h, -H, -x, -X, -U, -c")]
    TooManyRenderers,

    #[error("-o may not be used with -ob=8")]
    OctalWithOutputBase8,

    #[error("cannot use both -w and -width options at the same time")]
    WidthConflict,

    #[error("the -n option requires the -c option")]
    NoNewlineWithoutChars,

    #[error("input base must be from 2 to 36")]
    InputBase(u32),

    #[error("(-ob option) output base must be 2, 8, 10, or 16")]
    OutputBase(u32),

    #[error("-width does not work with a negative width")]
    NegativeWidth(i64),

    #[error("-width must not be greater than {}", MAX_WIDTH)]
    WidthTooLarge(usize),

    #[error("-w cannot be used without -r")]
    ConstantWidthWithoutRange,

    #[error("-ob={base} conflicts with {flag}")]
    OutputBaseConflict { base: u32, flag: &'static str },
}

/// Invocation style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Convert each input token independently.
    Stream,
    /// Generate an arithmetic sequence from the positional arguments.
    Range,
}

/// Validated settings for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub output: OutputSpec,
    pub input_base: u32,
    pub input_mode: InputMode,
    pub separator: String,
    /// Size the field to the widest range endpoint.
    pub constant_width: bool,
    /// Write a newline once all values are out.
    pub trailing_newline: bool,
    pub args: Vec<String>,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self, CipError> {
        let renderer_flag = renderer_flag(cli)?;

        if cli.octal && cli.output_base == Some(8) {
            return Err(ConfigError::OctalWithOutputBase8.into());
        }
        if cli.constant_width && cli.width > 0 {
            return Err(ConfigError::WidthConflict.into());
        }
        if cli.no_newline && !cli.chars {
            return Err(ConfigError::NoNewlineWithoutChars.into());
        }
        if cli.input_base != AUTO_BASE && !(2..=36).contains(&cli.input_base) {
            return Err(ConfigError::InputBase(cli.input_base).into());
        }
        if let Some(base) = cli.output_base {
            renderer_for_base(base)?;
        }
        let width =
            usize::try_from(cli.width).map_err(|_| ConfigError::NegativeWidth(cli.width))?;
        if width > MAX_WIDTH {
            return Err(ConfigError::WidthTooLarge(width).into());
        }
        if cli.constant_width && !cli.range {
            return Err(ConfigError::ConstantWidthWithoutRange.into());
        }

        let (renderer, alternate) = select_renderer(renderer_flag, cli.output_base)?;
        let output = OutputSpec::new(renderer)
            .with_width(width)
            .with_prefix(cli.prefix.as_str())
            .with_alternate(alternate);

        let separator = separator::resolve(cli.separator.as_deref(), renderer.is_character())?;

        let mode = if cli.range { Mode::Range } else { Mode::Stream };
        let trailing_newline = !cli.no_newline
            && (mode == Mode::Range || !renderer.is_character() || !cli.args.is_empty());

        Ok(Self {
            mode,
            output,
            input_base: cli.input_base,
            input_mode: if cli.char_input {
                InputMode::Character
            } else {
                InputMode::Numeric
            },
            separator,
            constant_width: cli.constant_width,
            trailing_newline,
            args: cli.args.clone(),
        })
    }
}

/// The single renderer flag given on the command line, if any.
fn renderer_flag(cli: &Cli) -> Result<Option<(&'static str, Renderer)>, ConfigError> {
    let flags = [
        (cli.binary, "-b", Renderer::Binary),
        (cli.octal, "-o", Renderer::Octal),
        (cli.hex_lower, "-h", Renderer::HexLower),
        (cli.hex_upper, "-H", Renderer::HexUpper),
        (cli.unicode, "-U", Renderer::Unicode),
        (cli.chars, "-c", Renderer::Character),
    ];
    let mut set = flags
        .into_iter()
        .filter(|(on, _, _)| *on)
        .map(|(_, flag, renderer)| (flag, renderer));

    let first = set.next();
    if set.next().is_some() {
        return Err(ConfigError::TooManyRenderers);
    }
    Ok(first)
}

fn renderer_for_base(base: u32) -> Result<Renderer, ConfigError> {
    match base {
        2 => Ok(Renderer::Binary),
        8 => Ok(Renderer::Octal),
        10 => Ok(Renderer::Decimal),
        16 => Ok(Renderer::HexLower),
        _ => Err(ConfigError::OutputBase(base)),
    }
}

/// Combine the renderer flag with `-ob`, returning the renderer and whether
/// the alternate (prefixed) form applies.
fn select_renderer(
    flag: Option<(&'static str, Renderer)>,
    output_base: Option<u32>,
) -> Result<(Renderer, bool), ConfigError> {
    match (flag, output_base) {
        (None, None) => Ok((Renderer::Decimal, false)),
        (None, Some(base)) => Ok((renderer_for_base(base)?, false)),
        (Some((_, renderer)), None) => Ok((
            renderer,
            matches!(
                renderer,
                Renderer::Octal | Renderer::HexLower | Renderer::HexUpper
            ),
        )),
        (Some((_, renderer @ (Renderer::HexLower | Renderer::HexUpper))), Some(16)) => {
            Ok((renderer, false))
        }
        (Some((flag, _)), Some(base)) => Err(ConfigError::OutputBaseConflict { base, flag }),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
