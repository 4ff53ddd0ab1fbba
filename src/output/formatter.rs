//! Renderer trait and the plain-text terminal bar chart

use crate::{
    chart::{format_value, BarSeries, ChartData},
    defaults,
    error::{AppError, Result},
    models::Config,
    types::OutputFormat,
};
use std::fmt::Write as _;

/// Trait implemented by every chart output backend
pub trait ChartRenderer {
    /// Format produced by this renderer
    fn format(&self) -> OutputFormat;

    /// Render the complete chart document
    fn render(&self, chart: &ChartData) -> Result<String>;
}

/// Options shared by all renderers
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Enable ANSI colors in terminal output
    pub enable_color: bool,
    /// Columns used by the longest terminal bar
    pub bar_width: usize,
    /// SVG canvas width in pixels
    pub canvas_width: u32,
    /// SVG canvas height in pixels
    pub canvas_height: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            enable_color: defaults::DEFAULT_ENABLE_COLOR,
            bar_width: defaults::DEFAULT_BAR_WIDTH,
            canvas_width: defaults::DEFAULT_CHART_WIDTH,
            canvas_height: defaults::DEFAULT_CHART_HEIGHT,
        }
    }
}

impl RenderOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            enable_color: config.enable_color,
            bar_width: config.bar_width,
            canvas_width: config.chart_width,
            canvas_height: config.chart_height,
        }
    }
}

/// One horizontal bar of the terminal chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarRow<'a> {
    pub category: &'a str,
    /// Only the first bar of a category prints the category name
    pub first_in_category: bool,
    pub series_index: usize,
    pub series: &'a BarSeries,
    pub latency: f64,
    /// Bar length in columns
    pub length: usize,
}

/// Scale a bar to the terminal width.
///
/// Bars are proportional to the largest magnitude; any non-zero value gets
/// at least one column so it stays visible next to a much larger bar.
pub fn bar_length(value: f64, max_magnitude: f64, bar_width: usize) -> usize {
    if max_magnitude <= 0.0 || value == 0.0 || bar_width == 0 {
        return 0;
    }
    let scaled = (value.abs() / max_magnitude * bar_width as f64).round() as usize;
    scaled.max(1).min(bar_width)
}

/// Lay out one row per bar, grouped by category in first-seen order
pub fn layout_rows(chart: &ChartData, bar_width: usize) -> Vec<BarRow<'_>> {
    let max_magnitude = chart.max_magnitude();
    let mut rows = Vec::new();

    for category in chart.categories() {
        let mut first_in_category = true;
        for (series_index, series) in chart.series.iter().enumerate() {
            for point in series.points.iter().filter(|p| p.name == category) {
                rows.push(BarRow {
                    category,
                    first_in_category,
                    series_index,
                    series,
                    latency: point.latency,
                    length: bar_length(point.latency, max_magnitude, bar_width),
                });
                first_in_category = false;
            }
        }
    }

    rows
}

/// Latency value label printed after each bar
pub fn format_latency(latency_ms: f64) -> String {
    format!("{} ms", format_value(latency_ms, 2))
}

/// Decorations applied to the terminal chart
pub(crate) trait TerminalStyle {
    fn title(&self, text: &str) -> String;
    fn muted(&self, text: &str) -> String;
    fn bar(&self, row: &BarRow<'_>) -> String;
    fn swatch(&self, series_index: usize, series: &BarSeries) -> String;
}

fn format_error(e: std::fmt::Error) -> AppError {
    AppError::render(format!("Failed to format chart: {}", e))
}

/// Draw the horizontal bar chart shared by the plain and colored renderers
pub(crate) fn draw_terminal_chart(
    chart: &ChartData,
    bar_width: usize,
    style: &dyn TerminalStyle,
) -> Result<String> {
    let rows = layout_rows(chart, bar_width);
    if rows.is_empty() {
        return Err(AppError::render("Chart has no bars to draw"));
    }

    let label_width = rows.iter().map(|r| r.category.chars().count()).max().unwrap_or(0);
    let mut output = String::new();

    writeln!(output, "{}", style.title(&chart.title)).map_err(format_error)?;
    writeln!(output, "{}", style.muted(&"=".repeat(chart.title.chars().count().max(1))))
        .map_err(format_error)?;
    writeln!(
        output,
        "{}",
        style.muted(&format!("{} by {}", chart.y_axis_title, chart.x_axis_title))
    )
    .map_err(format_error)?;
    writeln!(output).map_err(format_error)?;

    for row in &rows {
        let label = if row.first_in_category { row.category } else { "" };
        writeln!(
            output,
            "{:<width$} │{} {}",
            label,
            style.bar(row),
            format_latency(row.latency),
            width = label_width
        )
        .map_err(format_error)?;
    }

    let legend: Vec<String> = chart
        .series
        .iter()
        .enumerate()
        .map(|(index, series)| format!("{} {}", style.swatch(index, series), series.label))
        .collect();
    writeln!(output).map_err(format_error)?;
    write!(output, "Legend: {}", legend.join("   ")).map_err(format_error)?;

    Ok(output)
}

/// Glyphs distinguishing series when colors are off
const PLAIN_GLYPHS: [char; 4] = ['█', '▓', '▒', '░'];

fn plain_glyph(series_index: usize) -> char {
    PLAIN_GLYPHS[series_index % PLAIN_GLYPHS.len()]
}

/// Plain text terminal renderer
pub struct PlainRenderer {
    options: RenderOptions,
}

impl PlainRenderer {
    /// Create a new plain renderer with options
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl TerminalStyle for PlainRenderer {
    fn title(&self, text: &str) -> String {
        text.to_string()
    }

    fn muted(&self, text: &str) -> String {
        text.to_string()
    }

    fn bar(&self, row: &BarRow<'_>) -> String {
        plain_glyph(row.series_index).to_string().repeat(row.length)
    }

    fn swatch(&self, series_index: usize, _series: &BarSeries) -> String {
        plain_glyph(series_index).to_string()
    }
}

impl ChartRenderer for PlainRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Terminal
    }

    fn render(&self, chart: &ChartData) -> Result<String> {
        draw_terminal_chart(chart, self.options.bar_width, self)
    }
}
