//! CLI type definitions: command enums and argument structs.

use clap::{Parser, Subcommand};

use humansize_core::UnitBase;

#[derive(Parser)]
#[command(name = "humansize")]
#[command(about = "Convert byte counts to human-readable sizes", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to `demo` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Format a few sample sizes in both decimal and binary units
    Demo,

    /// Format the given byte counts
    Format {
        /// Byte counts to format
        #[arg(required = true, allow_negative_numbers = true)]
        sizes: Vec<i128>,

        /// Unit base: binary (1024, KiB) or decimal (1000, KB).
        /// Defaults to the saved setting, then binary.
        #[arg(short, long)]
        base: Option<UnitBase>,
    },

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the current settings
    Show,

    /// Print the settings file path
    Path,

    /// Save the default unit base used by `format`
    SetBase {
        /// binary (1024) or decimal (1000)
        base: UnitBase,
    },

    /// Forget the saved default unit base
    ClearBase,
}
