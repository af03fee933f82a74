use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::Result;
use clap::Parser;

use clex::{commandline::Options, driver};

fn main() -> Result<ExitCode> {
    let options = Options::parse();

    stderrlog::new()
        .module("clex")
        .verbosity(options.verbose)
        .init()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let success = match &options.file {
        None => {
            driver::repl(&mut io::stdin().lock(), &mut out)?;
            true
        }
        Some(file) if options.check => driver::check_file(file, &mut out)?,
        Some(file) => {
            driver::run_file(file, &mut out)?;
            true
        }
    };
    out.flush()?;

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
