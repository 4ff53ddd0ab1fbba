//! Data models and structures for the latency comparison

pub mod config;
pub mod latency;

// Re-export main model types
pub use config::Config;
pub use latency::{parse_latency, Comparison, ComparisonSummary, LatencyRecord};
