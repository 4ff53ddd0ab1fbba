//! Latency Comparison
//!
//! Renders the average latency of a standalone database instance next to
//! the latency of a clustered deployment as a grouped bar chart, either in
//! the terminal, as an SVG document or as a JSON chart description.

pub mod app;
pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use models::{Comparison, Config, LatencyRecord};
pub use chart::{BarMode, BarPoint, BarSeries, ChartData, SeriesColor};
pub use output::{ChartRenderer, OutputCoordinator, RendererFactory, RenderedChart};
pub use types::{Deployment, OutputFormat};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build metadata stamped by build.rs
pub mod build_info {
    pub const BUILD_TIME: &str = env!("BUILD_TIME");
    pub const TARGET_TRIPLE: &str = env!("TARGET_TRIPLE");
    pub const GIT_COMMIT: Option<&str> = option_env!("GIT_COMMIT");
}

/// Default configuration values
pub mod defaults {
    use std::ops::RangeInclusive;

    pub const DEFAULT_TITLE: &str = "Standalone vs Cluster latency";
    pub const DEFAULT_CHART_WIDTH: u32 = 800;
    pub const DEFAULT_CHART_HEIGHT: u32 = 600;
    pub const DEFAULT_BAR_WIDTH: usize = 50;
    pub const DEFAULT_ENABLE_COLOR: bool = true;

    pub const CHART_WIDTH_RANGE: RangeInclusive<u32> = 200..=4000;
    pub const CHART_HEIGHT_RANGE: RangeInclusive<u32> = 150..=4000;
    pub const BAR_WIDTH_RANGE: RangeInclusive<usize> = 10..=200;
}
