//! Chart data model for the grouped latency bar chart
//!
//! [`ChartData`] is the backend-independent description of what gets drawn:
//! one bar series per deployment, each carrying a single categorical point.
//! The terminal, SVG and JSON renderers all consume this structure, so the
//! same inputs always produce the same bars regardless of the output channel.

pub mod svg;

pub use svg::draw_svg;

use crate::{
    models::Comparison,
    types::{AppError, Deployment},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Widest value axis handed to the drawing backend
const MAX_AXIS_SPAN: f64 = f64::MAX / 16.0;

/// Magnitude from which values are printed in scientific notation
const SCIENTIFIC_THRESHOLD: f64 = 1e15;

/// Format a value with `precision` decimals, switching to scientific
/// notation for very large magnitudes
pub fn format_value(value: f64, precision: usize) -> String {
    if value.abs() >= SCIENTIFIC_THRESHOLD {
        format!("{:.*e}", precision, value)
    } else {
        format!("{:.*}", precision, value)
    }
}

/// Fixed RGB color of a bar series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SeriesColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl SeriesColor {
    /// Orange, used for the standalone series
    pub const ORANGE: SeriesColor = SeriesColor::new(0xff, 0xa5, 0x00);
    /// Green, used for the cluster series
    pub const GREEN: SeriesColor = SeriesColor::new(0x00, 0x80, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Color assigned to a deployment's series
    pub fn for_deployment(deployment: Deployment) -> Self {
        match deployment {
            Deployment::Standalone => Self::ORANGE,
            Deployment::Cluster => Self::GREEN,
        }
    }

    /// `#rrggbb` form
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for SeriesColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl From<SeriesColor> for String {
    fn from(color: SeriesColor) -> Self {
        color.hex()
    }
}

impl TryFrom<String> for SeriesColor {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let digits = value.strip_prefix('#').unwrap_or(&value);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AppError::parse(format!("Invalid color '{}', expected #rrggbb", value)));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| AppError::parse(format!("Invalid color '{}': {}", value, e)))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

/// One bar: a category on the x axis and its height
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPoint {
    pub name: String,
    pub latency: f64,
}

/// A labelled, colored series of bars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    /// Legend label
    pub label: String,
    pub color: SeriesColor,
    pub points: Vec<BarPoint>,
}

/// How series sharing a category are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    /// Bars of the same category sit side by side
    #[default]
    Group,
}

/// Complete description of the grouped bar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub title: String,
    #[serde(default)]
    pub bar_mode: BarMode,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub series: Vec<BarSeries>,
}

impl ChartData {
    /// Build the two-series chart for a standalone/cluster comparison
    pub fn from_comparison(comparison: &Comparison, title: &str) -> Self {
        let series = comparison
            .records()
            .into_iter()
            .map(|(deployment, record)| BarSeries {
                label: deployment.legend_label().to_string(),
                color: SeriesColor::for_deployment(deployment),
                points: vec![BarPoint {
                    name: record.name.clone(),
                    latency: record.latency,
                }],
            })
            .collect();

        Self {
            title: title.to_string(),
            bar_mode: BarMode::Group,
            x_axis_title: "Deployment".to_string(),
            y_axis_title: "Latency (ms)".to_string(),
            series,
        }
    }

    /// Distinct category names in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for point in self.series.iter().flat_map(|s| s.points.iter()) {
            if !categories.contains(&point.name.as_str()) {
                categories.push(point.name.as_str());
            }
        }
        categories
    }

    /// Series drawn for a deployment
    pub fn series_for(&self, deployment: Deployment) -> Option<&BarSeries> {
        self.series.iter().find(|s| s.label == deployment.legend_label())
    }

    /// Largest absolute bar height, used to scale terminal bars
    pub fn max_magnitude(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.points.iter())
            .map(|p| p.latency.abs())
            .fold(0.0, f64::max)
    }

    /// Smallest and largest bar height, with zero always included
    fn extent(&self) -> (f64, f64) {
        self.series
            .iter()
            .flat_map(|s| s.points.iter())
            .map(|p| p.latency)
            .fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(v), hi.max(v)))
    }

    /// Power of two that bar heights are divided by before drawing.
    ///
    /// It is 1 unless the padded span between the lowest and highest bar
    /// is too wide for the drawing backend.
    pub fn value_scale(&self) -> f64 {
        let (low, high) = self.extent();
        // Halves cannot overflow even for opposite extremes
        let half_span = high / 2.0 - low / 2.0;

        let mut scale = 1.0;
        while half_span / scale * 2.4 > MAX_AXIS_SPAN {
            scale *= 2.0;
        }
        scale
    }

    /// Value axis range in units of [`value_scale`](Self::value_scale).
    ///
    /// Always contains zero, is padded by 10% away from zero and is never
    /// empty. Its span is finite for any finite bar heights.
    pub fn value_range(&self) -> (f64, f64) {
        let scale = self.value_scale();
        let (low, high) = self.extent();
        let (low, high) = (low / scale, high / scale);

        let span = high - low;
        if span == 0.0 {
            return (0.0, 1.0);
        }

        let padding = span * 0.1;
        let low = if low < 0.0 { low - padding } else { low };
        let high = if high > 0.0 { high + padding } else { high };
        (low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn chart(standalone: &str, cluster: &str) -> ChartData {
        let comparison = Comparison::from_args(standalone, cluster).unwrap();
        ChartData::from_comparison(&comparison, "Latency")
    }

    #[test]
    fn test_two_series_with_single_points() {
        let data = chart("120.5", "45.2");
        assert_eq!(data.series.len(), 2);

        let standalone = data.series_for(Deployment::Standalone).unwrap();
        assert_eq!(standalone.label, "Standalone latency (avg/ms)");
        assert_eq!(standalone.color.hex(), "#ffa500");
        assert_eq!(standalone.points, vec![BarPoint { name: "Standalone".into(), latency: 120.5 }]);

        let cluster = data.series_for(Deployment::Cluster).unwrap();
        assert_eq!(cluster.label, "Cluster latency (avg/ms)");
        assert_eq!(cluster.color.hex(), "#008000");
        assert_eq!(cluster.points, vec![BarPoint { name: "Cluster".into(), latency: 45.2 }]);

        assert_ne!(standalone.color, cluster.color);
        assert_eq!(data.categories(), vec!["Standalone", "Cluster"]);
    }

    #[test]
    fn test_zero_values() {
        let data = chart("0", "0");
        assert_eq!(data.series[0].points[0].latency, 0.0);
        assert_eq!(data.series[1].points[0].latency, 0.0);
        assert_eq!(data.max_magnitude(), 0.0);
        assert_eq!(data.value_range(), (0.0, 1.0));
    }

    #[test]
    fn test_scientific_notation() {
        let data = chart("1e3", "2e2");
        assert_eq!(data.series[0].points[0].latency, 1000.0);
        assert_eq!(data.series[1].points[0].latency, 200.0);
        assert_eq!(data.value_range(), (0.0, 1100.0));
    }

    #[test]
    fn test_value_range_with_negative_values() {
        let data = chart("-10", "30");
        let (low, high) = data.value_range();
        assert_eq!(low, -14.0);
        assert_eq!(high, 34.0);
    }

    #[test]
    fn test_value_range_for_opposite_extremes() {
        for (standalone, cluster) in [("1e308", "-1e308"), ("1.7e308", "-1.7e308"), ("-1.7976931348623157e308", "0")] {
            let data = chart(standalone, cluster);
            let scale = data.value_scale();
            let (low, high) = data.value_range();
            assert!(scale > 1.0);
            assert!((high - low).is_finite());
            assert!(high - low <= MAX_AXIS_SPAN);
            for series in &data.series {
                let scaled = series.points[0].latency / scale;
                assert!(low <= scaled && scaled <= high);
            }
        }

        assert_eq!(chart("1e300", "2e300").value_scale(), 1.0);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(120.5, 2), "120.50");
        assert_eq!(format_value(-0.001, 2), "-0.00");
        assert_eq!(format_value(999_999_999_999_999.0, 1), "999999999999999.0");
        assert_eq!(format_value(1e15, 2), "1.00e15");
        assert_eq!(format_value(-1.7e308, 2), "-1.70e308");
    }

    #[test]
    fn test_color_from_json_string() {
        let color: SeriesColor = serde_json::from_str("\"#ffa500\"").unwrap();
        assert_eq!(color, SeriesColor::ORANGE);
        assert_eq!(SeriesColor::try_from("008000".to_string()).unwrap(), SeriesColor::GREEN);
        assert!(SeriesColor::try_from("#fff".to_string()).is_err());
        assert!(serde_json::from_str::<SeriesColor>("\"#gggggg\"").is_err());
    }

    #[test]
    fn test_json_shape() {
        let data = chart("120.5", "45.2");
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["bar_mode"], "group");
        assert_eq!(value["series"][0]["color"], "#ffa500");
        assert_eq!(value["series"][1]["points"][0]["name"], "Cluster");
        assert_eq!(value["series"][1]["points"][0]["latency"], 45.2);

        let back: ChartData = serde_json::from_value(value).unwrap();
        assert_eq!(back, data);
    }

    proptest! {
        /// Bar heights are exactly the parsed inputs, for any finite pair
        #[test]
        fn chart_points_match_inputs(
            a in any::<f64>().prop_filter("finite", |v| v.is_finite()),
            b in any::<f64>().prop_filter("finite", |v| v.is_finite()),
        ) {
            let data = chart(&a.to_string(), &b.to_string());
            prop_assert_eq!(data.series.len(), 2);
            prop_assert_eq!(data.series[0].points.len(), 1);
            prop_assert_eq!(data.series[1].points.len(), 1);
            prop_assert_eq!(data.series[0].points[0].latency.to_bits(), a.to_bits());
            prop_assert_eq!(data.series[1].points[0].latency.to_bits(), b.to_bits());

            let scale = data.value_scale();
            let (low, high) = data.value_range();
            prop_assert!((high - low).is_finite());
            prop_assert!(high > low);
            prop_assert!(low <= (a / scale).min(b / scale).min(0.0));
            prop_assert!(high >= (a / scale).max(b / scale).max(0.0));
        }

        /// Identical inputs always produce identical chart data
        #[test]
        fn chart_is_deterministic(a in any::<f64>().prop_filter("finite", |v| v.is_finite()), b in 0.0f64..1.0e6) {
            prop_assert_eq!(chart(&a.to_string(), &b.to_string()), chart(&a.to_string(), &b.to_string()));
        }
    }
}
