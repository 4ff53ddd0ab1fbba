//! Document renderers: SVG image and JSON chart description

use super::formatter::{ChartRenderer, RenderOptions};
use crate::{
    chart::{draw_svg, ChartData},
    error::Result,
    types::OutputFormat,
};

/// Renders the chart as an SVG document
pub struct SvgRenderer {
    width: u32,
    height: u32,
}

impl SvgRenderer {
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            width: options.canvas_width,
            height: options.canvas_height,
        }
    }
}

impl ChartRenderer for SvgRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Svg
    }

    fn render(&self, chart: &ChartData) -> Result<String> {
        draw_svg(chart, self.width, self.height)
    }
}

/// Renders the chart description as pretty-printed JSON
#[derive(Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ChartRenderer for JsonRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn render(&self, chart: &ChartData) -> Result<String> {
        Ok(serde_json::to_string_pretty(chart)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Comparison;

    fn chart(standalone: &str, cluster: &str) -> ChartData {
        let comparison = Comparison::from_args(standalone, cluster).unwrap();
        ChartData::from_comparison(&comparison, "Latency")
    }

    #[test]
    fn test_json_render() {
        let output = JsonRenderer::new().render(&chart("1e3", "2e2")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["title"], "Latency");
        assert_eq!(value["series"][0]["points"][0]["latency"], 1000.0);
        assert_eq!(value["series"][1]["points"][0]["latency"], 200.0);
        assert_eq!(value["series"][1]["label"], "Cluster latency (avg/ms)");
    }

    #[test]
    fn test_svg_render_uses_canvas_size() {
        let options = RenderOptions {
            canvas_width: 640,
            canvas_height: 480,
            ..Default::default()
        };
        let renderer = SvgRenderer::new(&options);
        assert_eq!(renderer.format(), OutputFormat::Svg);

        let output = renderer.render(&chart("120.5", "45.2")).unwrap();
        assert!(output.contains("<svg"));
        assert!(output.contains("640"));
        assert!(output.contains("480"));
        assert!(output.contains("Standalone latency (avg/ms)"));
    }
}
