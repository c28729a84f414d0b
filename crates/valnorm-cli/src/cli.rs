//! CLI argument definitions for `valnorm`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;
use valnorm_cli::logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "valnorm",
    version,
    about = "Normalize and present typed record fields",
    long_about = "Normalize raw record fields into canonical values and render them back.\n\n\
                  A field is typed by its name: color, date, distance, duration, element,\n\
                  letter, mass and number are built in."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v info, -vv debug, -vvv trace, -q errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include raw field values in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// TOML settings file (error_policy, date_format).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize every record in a JSON or CSV file.
    Normalize(NormalizeArgs),

    /// Sanitize one value and print its canonical form.
    Parse(ValueArgs),

    /// Sanitize one value and print how it is presented.
    Present(ValueArgs),

    /// List the registered types.
    Types,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Input file with one record per array element or CSV row.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Input format (default: from the file extension).
    #[arg(long = "format", value_enum)]
    pub format: Option<InputFormatArg>,

    /// Write canonical records to this file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Stop at the first field that fails to sanitize.
    #[arg(long = "fail-fast")]
    pub fail_fast: bool,

    /// `chrono` format for presented dates.
    #[arg(long = "date-format", value_name = "FORMAT")]
    pub date_format: Option<String>,

    /// Also print the presented form of every record.
    #[arg(long = "present")]
    pub present: bool,
}

#[derive(Parser)]
pub struct ValueArgs {
    /// Type name, e.g. distance.
    #[arg(value_name = "TYPE")]
    pub type_name: String,

    /// Raw text to sanitize.
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: String,

    /// `chrono` format for presented dates.
    #[arg(long = "date-format", value_name = "FORMAT")]
    pub date_format: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum InputFormatArg {
    Json,
    Csv,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}
