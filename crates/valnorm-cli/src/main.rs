//! `valnorm` command-line tool.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use valnorm_cli::logging::{LogConfig, init_logging};

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command};
use crate::commands::{run_normalize, run_parse, run_present, run_types};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&log_config(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = run(&cli).unwrap_or_else(|error| {
        eprintln!("error: {error:#}");
        1
    });
    std::process::exit(exit_code);
}

/// Run the selected command and return the process exit code.
fn run(cli: &Cli) -> Result<i32> {
    let config = cli.config.as_deref();
    match &cli.command {
        Command::Normalize(args) => {
            let outcome = run_normalize(args, config)?;
            print_summary(&outcome);
            Ok(i32::from(outcome.report.has_failures()))
        }
        Command::Parse(args) => run_parse(args, config).map(|()| 0),
        Command::Present(args) => run_present(args, config).map(|()| 0),
        Command::Types => run_types(config).map(|()| 0),
    }
}

/// `--log-level` beats `-v`/`-q`, and either one disables `RUST_LOG`.
fn log_config(cli: &Cli) -> LogConfig {
    let explicit = cli.verbosity.is_present() || cli.log_level.is_some();
    let level_filter = cli
        .log_level
        .map_or_else(|| cli.verbosity.tracing_level_filter(), Into::into);
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        use_env_filter: !explicit,
        ..LogConfig::default()
    }
    .with_level_filter(level_filter)
    .with_format(cli.log_format.into())
    .with_ansi(with_ansi)
    .with_log_file(cli.log_file.clone())
    .with_log_data(cli.log_data)
}
