// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! cip: convert integers and print.
//!
//! Reads unsigned 64-bit integers (or Unicode characters) from standard
//! input, from the command line, or from a generated arithmetic sequence,
//! and prints them in decimal, octal, hexadecimal, binary, `U+` code-point
//! notation, or as literal characters.
//!
//! The engine is split into small pieces the binary wires together:
//! - [`codec`] - parse tokens under a base, render values under an output spec
//! - [`separator`] - resolve the string written between values
//! - [`sequence`] - ascending/descending ranges without unsigned wraparound
//! - [`tokens`] - word or character tokens from stdin or arguments
//! - [`runtime`] - the driver for stream and range mode

pub mod cli;
pub mod codec;
pub mod config;
pub mod env;
pub mod error;
pub mod logging;
pub mod output;
pub mod runtime;
pub mod separator;
pub mod sequence;
pub mod tokens;
