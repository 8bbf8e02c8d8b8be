// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Number codec: reads tokens as unsigned 64-bit values and renders values
//! back to text.
//!
//! Parsing understands an explicit base (2-36), base auto-detection from a
//! numeric-literal prefix, and the `U+` code-point notation. Rendering is
//! driven by an [`OutputSpec`] whose [`Renderer`] is chosen once per run.

use crate::error::ParseError;

/// Code-point marker accepted on input and emitted by [`Renderer::Unicode`].
pub const UNICODE_MARKER: &str = "U+";

/// Input base meaning "detect from the token's prefix".
pub const AUTO_BASE: u32 = 0;

/// Largest field width accepted from the command line.
pub const MAX_WIDTH: usize = 1_000_000;

/// Parse `token` as an unsigned 64-bit integer.
///
/// `base` is either [`AUTO_BASE`] or 2-36. Tokens starting with `U+` are
/// always read as hexadecimal. Signs are rejected.
pub fn parse(token: &str, base: u32) -> Result<u64, ParseError> {
    if let Some(hex) = token.strip_prefix(UNICODE_MARKER) {
        return parse_digits(token, hex, 16);
    }

    let (base, digits) = if base == AUTO_BASE {
        detect_base(token)
    } else {
        (base, token)
    };
    parse_digits(token, digits, base)
}

/// Split a numeric-literal prefix off `token`, returning the base it implies.
fn detect_base(token: &str) -> (u32, &str) {
    let bytes = token.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' | b'X' => return (16, &token[2..]),
            b'o' | b'O' => return (8, &token[2..]),
            b'b' | b'B' => return (2, &token[2..]),
            _ => return (8, &token[1..]),
        }
    }
    (10, token)
}

fn parse_digits(token: &str, digits: &str, base: u32) -> Result<u64, ParseError> {
    if digits.is_empty() || !(2..=36).contains(&base) {
        return Err(ParseError::syntax(token, base));
    }

    // Validate every digit before accumulating so a malformed token is never
    // reported as out of range.
    let mut values = Vec::with_capacity(digits.len());
    for c in digits.chars() {
        match c.to_digit(base) {
            Some(d) => values.push(u64::from(d)),
            None => return Err(ParseError::syntax(token, base)),
        }
    }

    values
        .into_iter()
        .try_fold(0u64, |acc, d| {
            acc.checked_mul(u64::from(base))?.checked_add(d)
        })
        .ok_or_else(|| ParseError::range(token, base))
}

/// Output representation, selected once per run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Renderer {
    #[default]
    Decimal,
    Octal,
    HexLower,
    HexUpper,
    Binary,
    /// `U+` followed by at least four uppercase hex digits.
    Unicode,
    /// The character whose code point is the value.
    Character,
}

impl Renderer {
    /// Numeric base for the digit renderers, `None` for the pseudo-modes.
    pub fn radix(self) -> Option<u32> {
        match self {
            Renderer::Decimal => Some(10),
            Renderer::Octal => Some(8),
            Renderer::HexLower | Renderer::HexUpper => Some(16),
            Renderer::Binary => Some(2),
            Renderer::Unicode | Renderer::Character => None,
        }
    }

    pub fn is_character(self) -> bool {
        self == Renderer::Character
    }

    fn digits(self, value: u64) -> String {
        match self {
            Renderer::Octal => format!("{value:o}"),
            Renderer::HexLower => format!("{value:x}"),
            Renderer::HexUpper => format!("{value:X}"),
            Renderer::Binary => format!("{value:b}"),
            _ => value.to_string(),
        }
    }
}

/// Everything [`render`] needs to format a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputSpec {
    pub renderer: Renderer,
    /// Minimum digit-field width; 0 means natural width.
    pub width: usize,
    /// Caller text emitted verbatim before the number.
    pub prefix: String,
    /// Pad with zeros between prefix and digits; otherwise spaces before the prefix.
    pub zero_pad: bool,
    /// printf `#` form: `0x`/`0X` for hex, a guaranteed leading `0` for octal.
    pub alternate: bool,
}

impl OutputSpec {
    pub fn new(renderer: Renderer) -> Self {
        Self {
            renderer,
            width: 0,
            prefix: String::new(),
            zero_pad: true,
            alternate: false,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_zero_pad(mut self, zero_pad: bool) -> Self {
        self.zero_pad = zero_pad;
        self
    }

    pub fn with_alternate(mut self, alternate: bool) -> Self {
        self.alternate = alternate;
        self
    }

    fn radix_marker(&self) -> &'static str {
        match (self.alternate, self.renderer) {
            (true, Renderer::HexLower) => "0x",
            (true, Renderer::HexUpper) => "0X",
            _ => "",
        }
    }
}

impl Default for OutputSpec {
    fn default() -> Self {
        Self::new(Renderer::Decimal)
    }
}

/// Render `value` according to `spec`. Never fails.
pub fn render(value: u64, spec: &OutputSpec) -> String {
    match spec.renderer {
        Renderer::Unicode => format!("{}{}{:04X}", spec.prefix, UNICODE_MARKER, value),
        Renderer::Character => render_char(value).to_string(),
        _ => render_number(value, spec),
    }
}

fn render_char(value: u64) -> char {
    u32::try_from(value)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn render_number(value: u64, spec: &OutputSpec) -> String {
    let mut field = spec.renderer.digits(value);
    if spec.zero_pad && field.len() < spec.width {
        field.insert_str(0, &"0".repeat(spec.width - field.len()));
    }
    if spec.alternate && spec.renderer == Renderer::Octal && !field.starts_with('0') {
        field.insert(0, '0');
    }

    let number = format!("{}{}", spec.radix_marker(), field);
    if !spec.zero_pad && number.len() < spec.width {
        let pad = " ".repeat(spec.width - number.len());
        return format!("{pad}{}{number}", spec.prefix);
    }
    format!("{}{number}", spec.prefix)
}

/// Length of the digit field `render` produces for `value` at natural width.
///
/// The octal alternate form counts its leading zero; the hex `0x` marker and
/// the caller prefix are not part of the field. The pseudo-renderers have no
/// digit field and report 0.
pub fn field_width(value: u64, spec: &OutputSpec) -> usize {
    if spec.renderer.radix().is_none() {
        return 0;
    }
    let digits = spec.renderer.digits(value).len();
    if spec.alternate && spec.renderer == Renderer::Octal && value != 0 {
        digits + 1
    } else {
        digits
    }
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
