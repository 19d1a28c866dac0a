//! CLI argument definitions for the slotgate inspector.

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for inspection results.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Space-separated `key=value` pairs.
    Human,
}

/// Inspects the routing decisions a slotgate proxy would make.
#[derive(Parser, Debug)]
#[command(name = "slotgate", disable_help_subcommand = true)]
pub(crate) struct Cli {
    /// Controls how results are rendered.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub(crate) output: OutputFormat,
    /// The inspection to run.
    #[command(subcommand)]
    pub(crate) command: CliCommand,
}

/// Inspection subcommands.
#[derive(Subcommand, Debug, Clone)]
pub(crate) enum CliCommand {
    /// Routes one command given as its name followed by its arguments.
    Route {
        /// The command name (for example `get`).
        #[arg(value_name = "NAME")]
        name: String,
        /// Arguments forwarded verbatim.
        #[arg(
            value_name = "ARG",
            num_args = 0..,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        arguments: Vec<String>,
    },
    /// Prints the hash tag and slot of each key.
    Slot {
        /// Keys to hash.
        #[arg(value_name = "KEY", required = true, allow_hyphen_values = true)]
        keys: Vec<String>,
    },
    /// Lists the command classification table.
    Commands {
        /// Only list commands that are never proxied.
        #[arg(long, conflicts_with = "writes")]
        forbidden: bool,
        /// Only list commands that mutate data.
        #[arg(long)]
        writes: bool,
    },
}
