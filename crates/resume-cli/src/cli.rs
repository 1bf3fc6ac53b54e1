//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "resume-studio",
    version,
    about = "Resume Studio - canonical resume document tools",
    long_about = "Import, validate, and export resume documents.\n\n\
                  Supported inputs: portable schema JSON, alternate (HR) schema JSON,\n\
                  backup envelopes, and tabular export bundles (.zip).\n\
                  All imports normalize into one canonical document shape."
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
    /// Import a resume file (JSON or .zip bundle) into canonical form.
    Import(ImportArgs),

    /// Export a resume file to an external schema.
    Export(ExportArgs),

    /// Structurally validate a JSON resume file.
    Validate(ValidateArgs),

    /// List the fixed document sections.
    Sections,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Input file: a JSON payload (format auto-detected) or a .zip bundle.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write the canonical document here instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Input file: any supported JSON payload; it is normalized first.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Target schema.
    #[arg(long = "format", value_enum)]
    pub format: ExportFormatArg,

    /// Write the exported payload here instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// JSON resume file to check.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormatArg {
    /// Public portable schema (no visibility markers).
    Portable,
    /// Industry-alternate person/employment nesting.
    Alternate,
    /// Lossless versioned backup envelope.
    Backup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
