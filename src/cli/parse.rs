//! CLI parse: clap types for ukconf. No behavior; definitions only.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// ukconf - overlay build options onto a unikernel dotconfig
#[derive(Parser, Debug)]
#[command(name = "ukconf")]
#[command(about = "Overlay build options onto a unikernel dotconfig")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file path (overrides the global settings file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Never prompt; a missing .config is an error
    #[arg(long, global = true)]
    pub non_interactive: bool,

    /// Disable logging entirely
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Unset options in a project's dotconfig (deprecated)
    ///
    /// Each NAME is written as NAME=n. Options missing from the file are
    /// appended so the override is recorded.
    #[command(visible_alias = "u")]
    Unset {
        #[command(flatten)]
        target: TargetArgs,

        /// Option names, e.g. LIBDEVFS_DEV_STDOUT
        names: Vec<String>,
    },
    /// Set options in a project's dotconfig
    Set {
        #[command(flatten)]
        target: TargetArgs,

        /// Assignments of the form NAME=VALUE
        assignments: Vec<String>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Work on a unikernel at a path (default: current directory)
    #[arg(long, short = 'w')]
    pub workdir: Option<PathBuf>,

    /// Report what would change without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}
