//! Configuration parsing from CLI arguments and environment variables

use crate::{
    cli::Cli,
    config::env::EnvManager,
    error::Result,
    models::Config,
    types::OutputFormat,
};
use std::path::PathBuf;

/// Configuration parser that combines defaults, the env file, environment
/// variables and CLI arguments, in increasing order of precedence
pub struct ConfigParser {
    cli: Cli,
    env_file: Option<PathBuf>,
}

impl ConfigParser {
    /// Create a new configuration parser reading `.env` from the working directory
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            env_file: Some(PathBuf::from(".env")),
        }
    }

    /// Use a different env file, or none at all
    pub fn with_env_file(mut self, env_file: Option<PathBuf>) -> Self {
        self.env_file = env_file;
        self
    }

    /// Parse and build the complete configuration
    pub fn parse(&self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(path) = &self.env_file {
            EnvManager::load_env_file(path)?;
        }

        config.merge_from_env()?;
        let format_from_env = std::env::var("OUTPUT_FORMAT").is_ok();

        self.apply_cli_overrides(&mut config);

        // Infer the format from the output file only when nobody chose one
        if self.cli.format.is_none() && !format_from_env {
            if let Some(inferred) = config.output_path.as_deref().and_then(OutputFormat::from_extension) {
                config.output_format = inferred;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&self, config: &mut Config) {
        let cli = &self.cli;

        if let Some(format) = cli.format {
            config.output_format = format;
        }
        if let Some(ref output) = cli.output {
            config.output_path = Some(output.clone());
        }
        if let Some(ref title) = cli.title {
            config.title = title.clone();
        }
        if let Some(width) = cli.width {
            config.chart_width = width;
        }
        if let Some(height) = cli.height {
            config.chart_height = height;
        }
        if let Some(bar_width) = cli.bar_width {
            config.bar_width = bar_width;
        }

        config.enable_color = cli.use_colors(config.enable_color);

        // Set verbose and debug flags (these are CLI-only)
        config.verbose = cli.verbose;
        config.debug = cli.debug;
    }
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    ConfigParser::new(cli).parse()
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &Config) -> String {
    let mut summary = Vec::new();

    summary.push(format!("Title: {}", config.title));
    summary.push(format!("Output Format: {}", config.output_format));
    summary.push(format!(
        "Output: {}",
        config.output_path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "stdout".to_string())
    ));
    summary.push(format!("Canvas: {}x{}", config.chart_width, config.chart_height));
    summary.push(format!("Bar Width: {}", config.bar_width));
    summary.push(format!("Color Output: {}", config.enable_color));
    summary.push(format!("Verbose: {}", config.verbose));
    summary.push(format!("Debug: {}", config.debug));

    summary.join("\n")
}
