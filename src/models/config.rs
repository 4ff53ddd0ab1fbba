//! Configuration data model and validation

use crate::types::{AppError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Chart title
    #[serde(default = "default_title")]
    pub title: String,

    /// SVG canvas width in pixels
    #[serde(default = "default_chart_width")]
    pub chart_width: u32,

    /// SVG canvas height in pixels
    #[serde(default = "default_chart_height")]
    pub chart_height: u32,

    /// Longest terminal bar, in columns
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,

    /// Output channel
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Write to this file instead of stdout
    #[serde(default)]
    pub output_path: Option<PathBuf>,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
            bar_width: default_bar_width(),
            output_format: OutputFormat::default(),
            output_path: None,
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        use crate::defaults::{BAR_WIDTH_RANGE, CHART_HEIGHT_RANGE, CHART_WIDTH_RANGE};

        if self.title.trim().is_empty() {
            return Err(AppError::config("Chart title cannot be empty"));
        }

        if !CHART_WIDTH_RANGE.contains(&self.chart_width) {
            return Err(AppError::config(format!(
                "Chart width must be between {} and {} pixels, got: {}",
                CHART_WIDTH_RANGE.start(), CHART_WIDTH_RANGE.end(), self.chart_width
            )));
        }

        if !CHART_HEIGHT_RANGE.contains(&self.chart_height) {
            return Err(AppError::config(format!(
                "Chart height must be between {} and {} pixels, got: {}",
                CHART_HEIGHT_RANGE.start(), CHART_HEIGHT_RANGE.end(), self.chart_height
            )));
        }

        if !BAR_WIDTH_RANGE.contains(&self.bar_width) {
            return Err(AppError::config(format!(
                "Bar width must be between {} and {} columns, got: {}",
                BAR_WIDTH_RANGE.start(), BAR_WIDTH_RANGE.end(), self.bar_width
            )));
        }

        if let Some(path) = &self.output_path {
            if path.as_os_str().is_empty() {
                return Err(AppError::config("Output path cannot be empty"));
            }
            if path.is_dir() {
                return Err(AppError::config(format!(
                    "Output path '{}' is a directory",
                    path.display()
                )));
            }
        }

        Ok(())
    }

    /// Merge environment variables into this configuration
    pub fn merge_from_env(&mut self) -> Result<()> {
        if let Ok(title) = std::env::var("CHART_TITLE") {
            self.title = title;
        }

        if let Ok(width) = std::env::var("CHART_WIDTH") {
            self.chart_width = width.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid CHART_WIDTH value '{}': {}", width, e)))?;
        }

        if let Ok(height) = std::env::var("CHART_HEIGHT") {
            self.chart_height = height.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid CHART_HEIGHT value '{}': {}", height, e)))?;
        }

        if let Ok(bar_width) = std::env::var("BAR_WIDTH") {
            self.bar_width = bar_width.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid BAR_WIDTH value '{}': {}", bar_width, e)))?;
        }

        if let Ok(format) = std::env::var("OUTPUT_FORMAT") {
            self.output_format = format.parse()?;
        }

        if let Ok(path) = std::env::var("CHART_OUTPUT") {
            let path = path.trim();
            self.output_path = if path.is_empty() { None } else { Some(PathBuf::from(path)) };
        }

        if let Ok(enable_color) = std::env::var("ENABLE_COLOR") {
            self.enable_color = enable_color.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid ENABLE_COLOR value '{}': {}", enable_color, e)))?;
        }

        Ok(())
    }
}

// Default value functions for serde
fn default_title() -> String {
    crate::defaults::DEFAULT_TITLE.to_string()
}

fn default_chart_width() -> u32 {
    crate::defaults::DEFAULT_CHART_WIDTH
}

fn default_chart_height() -> u32 {
    crate::defaults::DEFAULT_CHART_HEIGHT
}

fn default_bar_width() -> usize {
    crate::defaults::DEFAULT_BAR_WIDTH
}

fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}
