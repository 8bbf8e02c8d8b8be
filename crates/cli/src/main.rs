// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! cip binary entry point.

use std::io::{self, BufWriter, IsTerminal, LineWriter, Write};

use cip::cli::Cli;
use cip::config::Config;
use cip::error::CipError;
use cip::logging;
use cip::output::print_error;
use cip::runtime::Runtime;

fn main() {
    let cli = Cli::parse_normalized();
    logging::init();

    let code = match run(&cli) {
        Ok(()) => 0,
        // The reader went away (e.g. `cip -r 1000000 | head`); nothing left to report.
        Err(CipError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => 0,
        Err(e) => {
            print_error(&e);
            e.exit_code()
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli) -> Result<(), CipError> {
    let runtime = Runtime::new(Config::from_cli(cli)?);

    let stdin = io::stdin();
    let stdout = io::stdout().lock();
    // Interactive input gets its output line by line instead of at EOF.
    let mut out: Box<dyn Write> = if stdin.is_terminal() {
        Box::new(LineWriter::new(stdout))
    } else {
        Box::new(BufWriter::new(stdout))
    };

    let result = runtime.run(stdin.lock(), &mut out);
    // Flush before the caller prints a diagnostic so stdout keeps its order.
    let flushed = out.flush();
    result?;
    flushed?;
    Ok(())
}
