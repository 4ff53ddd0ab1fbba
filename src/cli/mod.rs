//! Command-line interface

use crate::{
    error::AppError,
    types::OutputFormat,
};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Latency Comparison - render standalone vs cluster latency as a grouped bar chart
#[derive(Parser, Debug, Clone)]
#[command(name = "lcmp")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Standalone latency in milliseconds (e.g. 120.5 or 1e3)
    #[arg(value_name = "STANDALONE_METRICS", allow_hyphen_values = true)]
    pub standalone_metrics: String,

    /// Cluster latency in milliseconds (e.g. 45.2 or 2e2)
    #[arg(value_name = "CLUSTER_METRICS", allow_hyphen_values = true)]
    pub cluster_metrics: String,

    /// Output format (inferred from --output extension when omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the chart to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Chart title
    #[arg(long)]
    pub title: Option<String>,

    /// SVG canvas width in pixels
    #[arg(long, value_name = "PX")]
    pub width: Option<u32>,

    /// SVG canvas height in pixels
    #[arg(long, value_name = "PX")]
    pub height: Option<u32>,

    /// Length of the longest terminal bar, in columns
    #[arg(long, value_name = "COLS")]
    pub bar_width: Option<usize>,

    /// Force colored output
    #[arg(long, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print the comparison summary
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse arguments, mapping clap failures onto application errors.
    ///
    /// `--help` and `--version` are returned as `Err(Ok(clap::Error))` so
    /// the caller can print them and exit successfully.
    pub fn try_parse_args<I, T>(args: I) -> std::result::Result<Self, std::result::Result<clap::Error, AppError>>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|e| match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Ok(e),
            _ => Err(cli_error_to_app_error(&e)),
        })
    }

    /// Check if colors should be enabled, given the configured default
    pub fn use_colors(&self, configured: bool) -> bool {
        if self.color {
            true
        } else if self.no_color {
            false
        } else {
            configured && supports_color()
        }
    }
}

/// Translate a clap parse failure into the matching application error
pub fn cli_error_to_app_error(error: &clap::Error) -> AppError {
    match error.kind() {
        ErrorKind::MissingRequiredArgument => {
            let missing = match error.get(ContextKind::InvalidArg) {
                Some(ContextValue::Strings(names)) if !names.is_empty() => names.join(", "),
                _ => "a required argument".to_string(),
            };
            AppError::missing_argument(format!("{} was not provided", missing))
        }
        _ => {
            let rendered = error.to_string();
            let first_line = rendered.lines().next().unwrap_or_default();
            AppError::usage(first_line.trim_start_matches("error: ").trim())
        }
    }
}

/// Check if the terminal supports color output
fn supports_color() -> bool {
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    if !std::io::stdout().is_terminal() {
        return false;
    }

    #[cfg(target_os = "windows")]
    {
        if std::env::var("ANSICON").is_ok() || std::env::var("ConEmuANSI").is_ok() {
            return true;
        }
    }

    // Default to true on Unix-like systems, false on Windows
    #[cfg(unix)]
    {
        true
    }
    #[cfg(not(unix))]
    {
        false
    }
}
