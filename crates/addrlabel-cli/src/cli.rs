//! CLI argument definitions for the `addrlabel` command.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use addrlabel_ingest::DEFAULT_SHEET;

/// Records processed by `--test`.
pub const TEST_MODE_LIMIT: usize = 10;

#[derive(Parser)]
#[command(
    name = "addrlabel",
    version,
    about = "Clean a contact list and lay it out as printable address labels",
    long_about = "Clean a sales contact list and produce printable address labels.\n\n\
                  Writes one SVG document per label page, a mail-merge CSV and a\n\
                  data-quality report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Include names and addresses in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a contact list and write labels, mail-merge CSV and report.
    Run(RunArgs),

    /// Clean a contact list and print its diagnostics without writing files.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Contact list CSV, or a directory holding `<SHEET>.csv`.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Worksheet to read from a workbook, or `<INPUT>/<sheet>.csv` when INPUT is a directory.
    #[arg(long = "sheet", default_value = DEFAULT_SHEET)]
    pub sheet: String,

    /// Output directory for generated files (default: <INPUT dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Label sheet layout.
    #[arg(long = "layout", value_enum, default_value = "a4")]
    pub layout: LayoutArg,

    /// Characters per wrapped address line.
    #[arg(long = "max-chars", value_name = "N", default_value_t = 25)]
    pub max_chars: usize,

    /// Process only the first N records.
    #[arg(long = "limit", value_name = "N", conflicts_with = "test")]
    pub limit: Option<usize>,

    /// Test mode: process only the first 10 records.
    #[arg(long = "test")]
    pub test: bool,

    /// Honorific appended to every name.
    #[arg(long = "honorific", default_value = "様")]
    pub honorific: String,

    /// Font family written into the label pages.
    #[arg(long = "font", value_name = "FAMILY")]
    pub font: Option<String>,

    /// Render label text top-to-bottom.
    #[arg(long = "vertical")]
    pub vertical: bool,

    /// Outline each label cell on the rendered pages.
    #[arg(long = "cell-borders")]
    pub cell_borders: bool,

    /// Clean, lay out and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip label pages and the placement JSON.
    #[arg(long = "no-svg")]
    pub no_svg: bool,

    /// Skip the mail-merge CSV.
    #[arg(long = "no-csv")]
    pub no_csv: bool,

    /// Skip the quality report file.
    #[arg(long = "no-report")]
    pub no_report: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Contact list CSV, or a directory holding `<SHEET>.csv`.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Worksheet to read from a workbook, or `<INPUT>/<sheet>.csv` when INPUT is a directory.
    #[arg(long = "sheet", default_value = DEFAULT_SHEET)]
    pub sheet: String,
}

/// Label sheet presets.
#[derive(Clone, Copy, ValueEnum)]
pub enum LayoutArg {
    /// A4, 2 columns by 5 rows.
    A4,
    /// One postcard per page.
    Hagaki,
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
