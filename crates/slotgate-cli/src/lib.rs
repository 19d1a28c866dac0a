//! Command-line runtime for the slotgate routing inspector.
//!
//! The runtime owns argument parsing, configuration bootstrapping, telemetry
//! installation, and rendering of routing decisions. It is exercised both from
//! the binary entrypoint and from tests, where configuration loading and IO
//! streams can be substituted.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use slotgate_config::Config;
use slotgate_core::{OpFlags, Router, RouterConfig, commands};
use tracing::debug;

mod cli;
mod config;
mod errors;
mod output;
pub mod telemetry;


pub use cli::OutputFormat;
use cli::{Cli, CliCommand};
use config::{ConfigLoader, OrthoConfigLoader, command_arguments, split_config_arguments};
use errors::AppError;
use output::{SlotRecord, write_command, write_decision, write_slot};

const CLI_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::run");

/// Runs the CLI using the provided arguments and IO handles.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    run_with_loader(args, stdout, stderr, &OrthoConfigLoader)
}

pub(crate) fn run_with_loader<I, W, E, L>(
    args: I,
    stdout: &mut W,
    stderr: &mut E,
    loader: &L,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    let args: Vec<OsString> = args.into_iter().collect();
    let split = split_config_arguments(&args);

    let cli = match Cli::try_parse_from(command_arguments(&args, &split)) {
        Ok(cli) => cli,
        Err(error) if is_informational(&error) => {
            let _ = write!(stdout, "{error}");
            return ExitCode::SUCCESS;
        }
        Err(error) => return report(stderr, &AppError::CliUsage(error)),
    };

    let result = loader
        .load(&split.config_arguments)
        .and_then(|config| execute(&cli, &config, stdout));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report(stderr, &error),
    }
}

fn is_informational(error: &clap::Error) -> bool {
    matches!(
        error.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}

fn report<E: Write>(stderr: &mut E, error: &AppError) -> ExitCode {
    let _ = writeln!(stderr, "{error}");
    ExitCode::FAILURE
}

fn execute<W: Write>(cli: &Cli, config: &Config, stdout: &mut W) -> Result<(), AppError> {
    telemetry::initialise(config)?;
    let router = Router::new(RouterConfig::new(config.slot_count(), config.max_name_length())?);
    debug!(
        target: CLI_TARGET,
        slot_count = config.slot_count(),
        max_name_length = config.max_name_length(),
        "router configured"
    );

    match &cli.command {
        CliCommand::Route { name, arguments } => {
            let command: Vec<&str> = std::iter::once(name.as_str())
                .chain(arguments.iter().map(String::as_str))
                .collect();
            let decision = router.route(&command)?;
            write_decision(stdout, cli.output, &decision)
        }
        CliCommand::Slot { keys } => keys.iter().try_for_each(|key| {
            write_slot(
                stdout,
                cli.output,
                &SlotRecord::new(key, router.config().slot_count()),
            )
        }),
        CliCommand::Commands { forbidden, writes } => commands()
            .filter(|info| {
                let flags = info.flags();
                let forbidden_ok = !*forbidden || flags.is_not_allowed();
                let writes_ok = !*writes || flags.contains(OpFlags::WRITE);
                forbidden_ok && writes_ok
            })
            .try_for_each(|info| write_command(stdout, cli.output, info)),
    }
}
