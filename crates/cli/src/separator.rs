// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Separator resolution.
//!
//! A one-character override is used verbatim so a lone backslash or quote
//! passes through. Longer overrides are unescaped with double-quoted string
//! literal rules.

use crate::error::EscapeError;

/// Default separator between numeric outputs.
pub const DEFAULT_SEPARATOR: &str = "\n";

/// Resolve the string written between emitted values.
pub fn resolve(raw: Option<&str>, character_mode: bool) -> Result<String, EscapeError> {
    match raw {
        None if character_mode => Ok(String::new()),
        None => Ok(DEFAULT_SEPARATOR.to_string()),
        Some(raw) if raw.chars().count() <= 1 => Ok(raw.to_string()),
        Some(raw) => unescape(raw),
    }
}

/// Process backslash escapes in `raw`.
pub fn unescape(raw: &str) -> Result<String, EscapeError> {
    let fail = |reason: String| EscapeError {
        separator: raw.to_string(),
        reason,
    };

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {}
            '"' => return Err(fail("unescaped quote".to_string())),
            '\n' => return Err(fail("raw newline".to_string())),
            _ => {
                out.push(c);
                continue;
            }
        }

        let escaped = match chars.next() {
            Some('a') => '\x07',
            Some('b') => '\x08',
            Some('f') => '\x0c',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('v') => '\x0b',
            Some('\\') => '\\',
            Some('"') => '"',
            Some('x') => ascii(take_digits(&mut chars, 2, 16), "\\x").map_err(fail)?,
            Some(d @ '0'..='7') => {
                let rest = take_digits(&mut chars, 2, 8).map(|v| (d as u32 - '0' as u32) * 64 + v);
                ascii(rest, "octal").map_err(fail)?
            }
            Some('u') => scalar(take_digits(&mut chars, 4, 16)).map_err(fail)?,
            Some('U') => scalar(take_digits(&mut chars, 8, 16)).map_err(fail)?,
            Some(other) => return Err(fail(format!("unknown escape \\{other}"))),
            None => return Err(fail("trailing backslash".to_string())),
        };
        out.push(escaped);
    }

    Ok(out)
}

/// Read exactly `count` digits in `radix`, or `None` if the input runs short
/// or holds a non-digit.
fn take_digits(chars: &mut std::str::Chars<'_>, count: usize, radix: u32) -> Option<u32> {
    (0..count).try_fold(0u32, |acc, _| {
        let d = chars.next()?.to_digit(radix)?;
        Some(acc * radix + d)
    })
}

fn ascii(value: Option<u32>, what: &str) -> Result<char, String> {
    match value {
        Some(v) if v <= 0x7f => char::from_u32(v).ok_or_else(|| format!("bad {what} escape")),
        Some(v) => Err(format!("{what} escape {v:#x} is not ASCII")),
        None => Err(format!("malformed {what} escape")),
    }
}

fn scalar(value: Option<u32>) -> Result<char, String> {
    let v = value.ok_or_else(|| "malformed unicode escape".to_string())?;
    char::from_u32(v).ok_or_else(|| format!("{v:#x} is not a unicode scalar value"))
}

#[cfg(test)]
#[path = "separator_tests.rs"]
mod tests;
