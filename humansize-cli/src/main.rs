//! humansize CLI
//!
//! Command-line front end for converting byte counts to human-readable sizes.

mod cli_types;
mod commands;
mod error;
mod settings;

use std::io::Write;

use clap::Parser;
use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cli_types::{Cli, Commands, ConfigAction};
use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli.command.unwrap_or(Commands::Demo)) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Demo => commands::demo::run_demo(),
        Commands::Format { sizes, base } => commands::format::run_format(&sizes, base)?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::SetBase { base } => commands::config::run_config_set_base(base)?,
            ConfigAction::ClearBase => commands::config::run_config_clear_base()?,
        },
    }
    Ok(())
}

/// Route `log` output to stdout.
///
/// Normal runs print bare messages with a marker on warnings and errors.
/// `--verbose` adds timestamps, levels and debug records; `--quiet` keeps only
/// warnings and errors. `RUST_LOG` overrides either.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout);

    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                buf.timestamp_millis(),
                record.level(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Error => writeln!(
                buf,
                "{} {}",
                "\u{2717}".if_supports_color(Stdout, |t| t.red()),
                record.args()
            ),
            Level::Warn => writeln!(
                buf,
                "{} {}",
                "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                record.args()
            ),
            _ => writeln!(buf, "{}", record.args()),
        });
    }

    builder.init();
}
