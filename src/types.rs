//! Type definitions and aliases

use std::fmt;
use std::path::Path;
use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use crate::error::{AppError, Result};

/// The two deployments that are compared against each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Deployment {
    /// Single, non-clustered database instance used as the baseline
    Standalone,
    /// Multi-node database deployment
    Cluster,
}

impl Deployment {
    /// Category name shown on the x axis
    pub fn name(&self) -> &'static str {
        match self {
            Deployment::Standalone => "Standalone",
            Deployment::Cluster => "Cluster",
        }
    }

    /// Legend label of the series drawn for this deployment
    pub fn legend_label(&self) -> &'static str {
        match self {
            Deployment::Standalone => "Standalone latency (avg/ms)",
            Deployment::Cluster => "Cluster latency (avg/ms)",
        }
    }

    /// Name of the positional argument carrying this deployment's latency
    pub fn argument_name(&self) -> &'static str {
        match self {
            Deployment::Standalone => "standalone_metrics",
            Deployment::Cluster => "cluster_metrics",
        }
    }
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Output channel for the rendered comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bar chart drawn with block characters in the terminal
    #[default]
    Terminal,
    /// Standalone SVG document
    Svg,
    /// JSON description of the chart data
    Json,
}

impl OutputFormat {
    /// Get format name as string
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Terminal => "terminal",
            OutputFormat::Svg => "svg",
            OutputFormat::Json => "json",
        }
    }

    /// Infer the format from a file extension, if it names one
    pub fn from_extension(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "svg" => Some(OutputFormat::Svg),
            "json" => Some(OutputFormat::Json),
            "txt" => Some(OutputFormat::Terminal),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "terminal" | "text" => Ok(OutputFormat::Terminal),
            "svg" => Ok(OutputFormat::Svg),
            "json" => Ok(OutputFormat::Json),
            _ => Err(AppError::config(format!(
                "Invalid output format '{}' (expected terminal, svg or json)",
                s
            ))),
        }
    }
}
