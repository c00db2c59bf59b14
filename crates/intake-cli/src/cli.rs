//! CLI argument definitions for the roster intake tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use intake_dates::DateOrder;
use intake_ingest::CommitPolicy;

#[derive(Parser)]
#[command(
    name = "intake",
    version,
    about = "Participant roster intake - normalize birth dates and load CSV rosters",
    long_about = "Normalize free-form birth dates to ISO 8601 and load participant rosters.\n\n\
                  Rosters may use any column order, a header row or none, and any common\n\
                  text encoding. Every row is validated before anything is committed."
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

    /// Allow participant names and dates to appear in logs.
    ///
    /// Values are redacted by default.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// TOML file with default settings.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize one or more date values to YYYY-MM-DD.
    Normalize(NormalizeArgs),

    /// Validate and load a participant roster CSV.
    Ingest(IngestArgs),
}

/// Day/month precedence flags shared by both commands.
#[derive(Args, Clone, Copy, Default)]
pub struct OrderArgs {
    /// Read ambiguous dates as month/day/year.
    #[arg(long = "month-first", conflicts_with = "day_first")]
    pub month_first: bool,

    /// Read ambiguous dates as day/month/year (the default).
    #[arg(long = "day-first")]
    pub day_first: bool,
}

impl OrderArgs {
    /// Resolves the flags against a configured fallback.
    pub fn resolve(self, fallback: DateOrder) -> DateOrder {
        if self.month_first {
            DateOrder::MonthFirst
        } else if self.day_first {
            DateOrder::DayFirst
        } else {
            fallback
        }
    }
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Date values to normalize.
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,

    #[command(flatten)]
    pub order: OrderArgs,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct IngestArgs {
    /// Roster CSV file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub order: OrderArgs,

    /// Text encoding label of the file (default: utf-8).
    #[arg(long = "encoding", value_name = "LABEL")]
    pub encoding: Option<String>,

    /// What to commit when some rows fail validation.
    #[arg(long = "policy", value_enum)]
    pub policy: Option<PolicyArg>,

    /// Largest accepted file size in bytes.
    #[arg(long = "max-bytes", value_name = "BYTES")]
    pub max_bytes: Option<u64>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI commit policy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    AllOrNothing,
    ValidSubset,
}

impl From<PolicyArg> for CommitPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::AllOrNothing => Self::AllOrNothing,
            PolicyArg::ValidSubset => Self::ValidSubset,
        }
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
