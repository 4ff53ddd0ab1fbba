//! Output rendering and delivery
//!
//! Turns a [`ChartData`] into a terminal bar chart, an SVG document or a JSON
//! description, and writes the result to stdout or to the configured file.
//! Only the rendered chart (and, in terminal mode, the verbose summary) is
//! written to stdout; everything else goes to stderr.

mod colored;
mod document;
mod formatter;
mod summary;

pub use colored::ColoredRenderer;
pub use document::{JsonRenderer, SvgRenderer};
pub use formatter::{
    bar_length,
    format_latency,
    layout_rows,
    BarRow,
    ChartRenderer,
    PlainRenderer,
    RenderOptions,
};
pub use summary::SummaryFormatter;

use crate::{
    chart::ChartData,
    error::{ErrorContext, Result},
    models::{Comparison, Config},
    types::OutputFormat,
};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Renderer factory selecting the backend for the configured format
pub struct RendererFactory;

impl RendererFactory {
    /// Create a renderer based on output format and color preference
    pub fn create_renderer(config: &Config) -> Box<dyn ChartRenderer> {
        let options = RenderOptions::from_config(config);

        match config.output_format {
            OutputFormat::Terminal if options.enable_color => Box::new(ColoredRenderer::new(options)),
            OutputFormat::Terminal => Box::new(PlainRenderer::new(options)),
            OutputFormat::Svg => Box::new(SvgRenderer::new(&options)),
            OutputFormat::Json => Box::new(JsonRenderer::new()),
        }
    }
}

/// A rendered chart ready to be delivered
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    pub format: OutputFormat,
    pub content: String,
    /// Verbose comparison summary, when requested
    pub summary: Option<String>,
}

/// Main output coordinator that renders and delivers the chart
pub struct OutputCoordinator {
    renderer: Box<dyn ChartRenderer>,
    summary_formatter: Option<SummaryFormatter>,
    output_path: Option<PathBuf>,
}

impl OutputCoordinator {
    /// Create a coordinator printing to stdout without a summary
    pub fn new(renderer: Box<dyn ChartRenderer>) -> Self {
        Self {
            renderer,
            summary_formatter: None,
            output_path: None,
        }
    }

    /// Create a coordinator from the complete configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            renderer: RendererFactory::create_renderer(config),
            summary_formatter: config.verbose.then(|| SummaryFormatter::new(config.enable_color)),
            output_path: config.output_path.clone(),
        }
    }

    /// Write to a file instead of stdout
    pub fn with_output_path(mut self, path: Option<PathBuf>) -> Self {
        self.output_path = path;
        self
    }

    /// Target file, if any
    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    /// Render the chart and the optional summary
    pub fn render(&self, chart: &ChartData, comparison: &Comparison) -> Result<RenderedChart> {
        let content = self.renderer.render(chart)?;
        let summary = match &self.summary_formatter {
            Some(formatter) => Some(formatter.format(comparison)?),
            None => None,
        };

        Ok(RenderedChart {
            format: self.renderer.format(),
            content,
            summary,
        })
    }

    /// Deliver a rendered chart.
    ///
    /// With an output file the chart goes to the file and the summary to
    /// `out`. Without one, documents (SVG/JSON) stay clean on `out` and the
    /// summary moves to `err`; a terminal chart is followed by its summary.
    pub fn deliver_to<O, E>(&self, rendered: &RenderedChart, out: &mut O, err: &mut E) -> Result<()>
    where
        O: Write,
        E: Write,
    {
        let content = with_trailing_newline(&rendered.content);

        match &self.output_path {
            Some(path) => {
                fs::write(path, content.as_bytes())
                    .with_context(|| format!("Failed to write chart to {}", path.display()))?;
                if let Some(summary) = &rendered.summary {
                    writeln!(out, "{}", summary)?;
                }
            }
            None => {
                out.write_all(content.as_bytes())?;
                if let Some(summary) = &rendered.summary {
                    if rendered.format == OutputFormat::Terminal {
                        writeln!(out)?;
                        writeln!(out, "{}", summary)?;
                    } else {
                        writeln!(err, "{}", summary)?;
                    }
                }
            }
        }

        out.flush()?;
        err.flush()?;
        Ok(())
    }
}

fn with_trailing_newline(content: &str) -> String {
    if content.ends_with('\n') {
        content.to_string()
    } else {
        format!("{}\n", content)
    }
}
