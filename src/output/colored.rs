//! Colored terminal renderer
//!
//! Draws the same bar chart as [`PlainRenderer`](super::PlainRenderer) but
//! paints every bar and legend swatch in its series color using 24-bit ANSI
//! escapes, so all series can share the full block glyph.

use super::formatter::{draw_terminal_chart, BarRow, ChartRenderer, RenderOptions, TerminalStyle};
use crate::{
    chart::{BarSeries, ChartData, SeriesColor},
    error::Result,
    types::OutputFormat,
};
use colored::*;

const BAR_GLYPH: &str = "█";

/// Colored terminal renderer
pub struct ColoredRenderer {
    options: RenderOptions,
}

impl ColoredRenderer {
    /// Create a new colored renderer with options
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    fn paint(&self, text: &str, color: SeriesColor) -> ColoredString {
        text.truecolor(color.r, color.g, color.b)
    }
}

impl TerminalStyle for ColoredRenderer {
    fn title(&self, text: &str) -> String {
        text.bold().to_string()
    }

    fn muted(&self, text: &str) -> String {
        text.dimmed().to_string()
    }

    fn bar(&self, row: &BarRow<'_>) -> String {
        if row.length == 0 {
            return String::new();
        }
        self.paint(&BAR_GLYPH.repeat(row.length), row.series.color).to_string()
    }

    fn swatch(&self, _series_index: usize, series: &BarSeries) -> String {
        self.paint(BAR_GLYPH, series.color).to_string()
    }
}

impl ChartRenderer for ColoredRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Terminal
    }

    fn render(&self, chart: &ChartData) -> Result<String> {
        draw_terminal_chart(chart, self.options.bar_width, self)
    }
}
