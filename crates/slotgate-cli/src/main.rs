//! CLI entrypoint for the slotgate routing inspector.
//!
//! The binary delegates to [`slotgate_cli::run`], which loads configuration,
//! installs telemetry, and prints routing decisions for the command given on
//! the command line.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    slotgate_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}
