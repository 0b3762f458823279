//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rximport",
    version,
    about = "Pharmacy inventory import toolkit",
    long_about = "Map messy spreadsheet columns onto canonical inventory fields\n\
                  and parse free-text product lines into structured records."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Auto-map a CSV file's columns onto the canonical fields.
    Map(MapArgs),

    /// Parse free-text product lines into structured fields.
    Parse(ParseArgs),

    /// List the canonical target fields and their known synonyms.
    Fields,
}

#[derive(Parser)]
pub struct MapArgs {
    /// Path to the CSV file to map.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write the resulting import config as JSON to this path.
    #[arg(long = "json", value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// How many nearest-field hints to show per unmapped column.
    #[arg(long = "hints", value_name = "N", default_value_t = 3)]
    pub hints: usize,
}

#[derive(Parser)]
pub struct ParseArgs {
    /// A single product line to parse.
    #[arg(value_name = "LINE")]
    pub line: Option<String>,

    /// Parse every non-empty line of this file instead.
    #[arg(long = "file", value_name = "PATH", conflicts_with = "line")]
    pub file: Option<PathBuf>,
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
