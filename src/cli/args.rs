// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser, ValueHint};
use tracing_subscriber::filter::LevelFilter;

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "readability",
    version = crate::VERSION,
    about = "Readability scores (ARI, Flesch–Kincaid, SMOG, Coleman–Liau) and reader ages for a text file"
)]
pub struct Args {
    /// Text file to analyze. Prompted for when omitted.
    #[arg(value_hint = ValueHint::FilePath)]
    pub path: Option<PathBuf>,

    /// Score to report: ari, fk, smog, cl or all (case-insensitive). Prompted for when omitted.
    #[arg(short, long, env = "READABILITY_SCORE", help_heading = "Output")]
    pub score: Option<String>,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "text",
        env = "READABILITY_FORMAT",
        help_heading = "Output"
    )]
    pub format: CliOutputFormat,

    #[command(flatten)]
    pub logging: LoggingOpts,
}

/// Diagnostic verbosity. Diagnostics go to stderr and default to warnings only.
#[derive(ClapArgs, Debug, Clone, Copy, Default)]
#[group(id = "logging", multiple = false)]
pub struct LoggingOpts {
    /// More diagnostics (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Logging")]
    pub verbose: u8,

    /// Errors only
    #[arg(short, long, global = true, help_heading = "Logging")]
    pub quiet: bool,
}

impl LoggingOpts {
    pub const fn level_filter(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}
