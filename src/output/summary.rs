//! Verbose comparison summary printed next to the chart

use super::formatter::format_latency;
use crate::{
    chart::format_value,
    error::{AppError, Result},
    models::Comparison,
};
use colored::Colorize;
use std::fmt::Write as _;

/// Formats the difference figures between the two deployments
pub struct SummaryFormatter {
    use_color: bool,
}

impl SummaryFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn highlight(&self, text: &str) -> String {
        if self.use_color {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Format the summary block for a comparison
    pub fn format(&self, comparison: &Comparison) -> Result<String> {
        let summary = comparison.summary();
        let fmt_err = |e: std::fmt::Error| AppError::render(format!("Failed to format summary: {}", e));
        let mut output = String::new();

        writeln!(output, "{}", self.heading("Comparison Summary")).map_err(fmt_err)?;
        writeln!(output, "{}", "-".repeat(18)).map_err(fmt_err)?;
        writeln!(output, "Standalone:   {}", format_latency(comparison.standalone.latency)).map_err(fmt_err)?;
        writeln!(output, "Cluster:      {}", format_latency(comparison.cluster.latency)).map_err(fmt_err)?;
        let difference = match summary.difference_ms {
            Some(difference) => format!("{} ms", signed(difference)),
            None => "out of range".to_string(),
        };
        writeln!(output, "Difference:   {}", difference).map_err(fmt_err)?;

        let ratio = match summary.ratio {
            Some(ratio) => format!("{}x", format_value(ratio, 2)),
            None if comparison.standalone.latency == 0.0 => "n/a (standalone latency is zero)".to_string(),
            None => "out of range".to_string(),
        };
        writeln!(output, "Ratio:        {}", ratio).map_err(fmt_err)?;

        let change = match summary.percent_change {
            Some(change) => format!("{}%", signed(change)),
            None => "n/a".to_string(),
        };
        writeln!(output, "Change:       {}", change).map_err(fmt_err)?;

        let faster = match summary.faster {
            Some(deployment) => self.highlight(deployment.name()),
            None => "neither (equal latency)".to_string(),
        };
        write!(output, "Faster:       {}", faster).map_err(fmt_err)?;

        Ok(output)
    }
}

/// Two-decimal value with an explicit sign
fn signed(value: f64) -> String {
    let text = format_value(value, 2);
    if value.is_sign_negative() {
        text
    } else {
        format!("+{}", text)
    }
}
