// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing setup.
//!
//! Tracing is off unless `CIP_LOG` holds filter directives, so converted
//! output on stdout is never mixed with log lines. When enabled, events go
//! to stderr.

use tracing_subscriber::EnvFilter;

use crate::env;
use crate::output::print_warning;

/// Install the stderr subscriber if `CIP_LOG` asks for one.
pub fn init() {
    let Some(directives) = env::log_filter() else {
        return;
    };

    let filter = match EnvFilter::try_new(&directives) {
        Ok(filter) => filter,
        Err(e) => {
            print_warning(format_args!("ignoring {}='{}': {}", env::CIP_LOG, directives, e));
            return;
        }
    };

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .try_init()
    {
        print_warning(format_args!("failed to initialize tracing: {}", e));
    }
}
