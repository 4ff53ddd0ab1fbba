//! SVG drawing of the grouped bar chart with the plotters SVG backend

use super::{format_value, ChartData, SeriesColor};
use crate::error::{AppError, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

/// Horizontal gap between a category's border and its first bar, in category units
const GROUP_GAP: f64 = 0.15;

impl<E> From<DrawingAreaErrorKind<E>> for AppError
where
    E: std::error::Error + Send + Sync,
{
    fn from(error: DrawingAreaErrorKind<E>) -> Self {
        AppError::render(error.to_string())
    }
}

impl From<SeriesColor> for RGBColor {
    fn from(color: SeriesColor) -> Self {
        RGBColor(color.r, color.g, color.b)
    }
}

/// Horizontal extent of the bar drawn for `series_index` inside `category_index`.
///
/// Every category is one unit wide; the bars of all series share the space
/// left after the outer gaps, side by side in series order.
fn bar_extent(category_index: usize, series_index: usize, series_count: usize) -> (f64, f64) {
    let slot = (1.0 - 2.0 * GROUP_GAP) / series_count.max(1) as f64;
    let start = category_index as f64 + GROUP_GAP + slot * series_index as f64;
    (start, start + slot)
}

/// Draw the chart as a complete SVG document
pub fn draw_svg(chart: &ChartData, width: u32, height: u32) -> Result<String> {
    let categories = chart.categories();
    if categories.is_empty() {
        return Err(AppError::render("Chart has no bars to draw"));
    }

    let mut document = String::new();
    {
        let root = SVGBackend::with_string(&mut document, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;

        let scale = chart.value_scale();
        let (y_low, y_high) = chart.value_range();

        let mut plot = ChartBuilder::on(&root)
            .caption(&chart.title, ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(0.0..categories.len() as f64, y_low..y_high)?;

        plot.configure_mesh()
            .disable_x_mesh()
            .x_labels(0)
            .x_desc(chart.x_axis_title.as_str())
            .y_desc(chart.y_axis_title.as_str())
            .y_label_formatter(&|v| format_value(*v * scale, 1))
            .draw()?;

        // Category names sit under the middle of their group
        let label_style = TextStyle::from(("sans-serif", 15).into_font()).pos(Pos::new(HPos::Center, VPos::Top));
        for (index, category) in categories.iter().enumerate() {
            let (x, y) = plot.backend_coord(&(index as f64 + 0.5, y_low));
            root.draw(&Text::new(category.to_string(), (x, y + 8), label_style.clone()))?;
        }

        let series_count = chart.series.len();
        for (series_index, series) in chart.series.iter().enumerate() {
            let color: RGBColor = series.color.into();
            let bars = series.points.iter().filter_map(|point| {
                let category_index = categories.iter().position(|c| *c == point.name)?;
                let (x0, x1) = bar_extent(category_index, series_index, series_count);
                Some(Rectangle::new([(x0, 0.0), (x1, point.latency / scale)], color.filled()))
            });

            plot.draw_series(bars)?
                .label(series.label.as_str())
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));
        }

        plot.configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
    }

    Ok(document)
}
