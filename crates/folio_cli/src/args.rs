use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Browse portfolio catalogs from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Defaults to `debug` in debug builds, `info` otherwise.
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    /// Absolute directory for rotated log files; logging stays off without it.
    #[arg(long, global = true)]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Education entries, filtered by category and tag
    Education {
        /// `all`, `degree`, `program` or `course`
        #[arg(long, default_value = "all")]
        category: String,

        /// Tag id; empty means no tag filter
        #[arg(long, default_value = "")]
        tag: String,
    },

    /// Work experience, most recent first, with timeline years
    Experience {
        /// `all`, `pmo`, `internship` or `data`
        #[arg(long, default_value = "all")]
        category: String,

        /// Month that ongoing roles resolve to (YYYY-MM); defaults to today
        #[arg(long)]
        now: Option<String>,

        /// Show details of this entry
        #[arg(long)]
        expand: Option<String>,
    },

    /// Side projects, optionally filtered by technology
    Projects {
        #[arg(long, default_value = "")]
        tag: String,
    },

    /// Skill levels
    Skills,

    /// Print core ping and version
    Ping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
