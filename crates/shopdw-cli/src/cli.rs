//! CLI argument definitions for the warehouse ETL runner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "shopdw-etl",
    version,
    about = "Sales warehouse ETL - Build a star schema from store snapshots",
    long_about = "Transform an operational store snapshot (users, products, orders)\n\
                  into a star-schema warehouse: four dimension tables and one\n\
                  line-item-grain fact table, exported as CSV files and a\n\
                  full-refresh SQL load script."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full ETL over a snapshot folder.
    Run(RunArgs),

    /// Print the star-schema DDL and exit.
    Schema,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the snapshot folder containing the collection exports.
    #[arg(value_name = "SNAPSHOT_DIR")]
    pub snapshot_dir: PathBuf,

    /// Output directory for generated files (default: <SNAPSHOT_DIR>/warehouse).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "both")]
    pub format: OutputFormatArg,

    /// Transform and summarize without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip the analytics summary at the end of the run.
    #[arg(long = "no-analytics")]
    pub no_analytics: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Sql,
    Both,
}

impl OutputFormatArg {
    pub fn writes_csv(self) -> bool {
        matches!(self, Self::Csv | Self::Both)
    }

    pub fn writes_sql(self) -> bool {
        matches!(self, Self::Sql | Self::Both)
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
