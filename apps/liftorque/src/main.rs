//! liftorque binary entry point.

use clap::Parser;
use liftorque::cli::{init_tracing, run, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    // clap exits with status 2 and a usage message on missing or invalid flags
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(&cli)
}
