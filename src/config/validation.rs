//! Configuration validation utilities and rules

use crate::{
    models::Config,
    error::Result,
    types::OutputFormat,
};
use colored::Colorize;

/// Configuration validator producing non-fatal warnings on top of `Config::validate`
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration with comprehensive checks
    pub fn validate_comprehensive(config: &Config) -> Result<Vec<ValidationWarning>> {
        config.validate()?;

        let mut warnings = Vec::new();
        warnings.extend(Self::validate_output_target(config));
        warnings.extend(Self::validate_dimensions(config));
        Ok(warnings)
    }

    /// Check that the output file matches the selected format
    fn validate_output_target(config: &Config) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();
        let Some(path) = &config.output_path else {
            return warnings;
        };

        let inferred = OutputFormat::from_extension(path);
        if inferred.is_some() && inferred != Some(config.output_format) {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Warning,
                format!(
                    "Output file '{}' has an extension that does not match the {} format",
                    path.display(),
                    config.output_format
                ),
            ));
        }

        if config.output_format == OutputFormat::Terminal && config.enable_color {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Warning,
                format!(
                    "Colored terminal output will write ANSI escape codes to '{}'; use --no-color for a plain file",
                    path.display()
                ),
            ));
        }

        warnings
    }

    /// Flag canvas and bar sizes that render poorly
    fn validate_dimensions(config: &Config) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        if config.output_format == OutputFormat::Svg && (config.chart_width < 400 || config.chart_height < 300) {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Info,
                format!(
                    "Canvas {}x{} is small; axis labels and legend may overlap",
                    config.chart_width, config.chart_height
                ),
            ));
        }

        if config.output_format == OutputFormat::Terminal && config.bar_width > 120 {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Info,
                format!("Bar width {} may wrap on narrow terminals", config.bar_width),
            ));
        }

        warnings
    }
}

/// Severity of a validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationLevel {
    Info,
    Warning,
}

impl ValidationLevel {
    /// Get display string for level
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
        }
    }
}

/// Configuration validation warning
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub level: ValidationLevel,
    pub message: String,
}

impl ValidationWarning {
    /// Create a new validation warning
    pub fn new(level: ValidationLevel, message: String) -> Self {
        Self { level, message }
    }

    /// Format warning for display
    pub fn format(&self, use_color: bool) -> String {
        let tag = format!("[{}]", self.level.as_str());
        if use_color {
            let tag = match self.level {
                ValidationLevel::Info => tag.blue(),
                ValidationLevel::Warning => tag.yellow(),
            };
            format!("{} {}", tag, self.message)
        } else {
            format!("{} {}", tag, self.message)
        }
    }
}

/// Convenience function for comprehensive configuration validation
pub fn validate_config(config: &Config) -> Result<Vec<ValidationWarning>> {
    ConfigValidator::validate_comprehensive(config)
}
