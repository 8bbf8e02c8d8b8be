// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by cip are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

/// `CIP_LOG`: tracing filter directives, e.g. `cip=debug`. Unset or empty disables tracing.
pub fn log_filter() -> Option<String> {
    std::env::var(names::CIP_LOG)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// `NO_COLOR`: any non-empty value disables colored diagnostics.
pub fn no_color() -> bool {
    std::env::var_os(names::NO_COLOR).is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
