//! Latency records and the standalone/cluster comparison built from them

use crate::types::{AppError, Deployment, Result};
use serde::{Deserialize, Serialize};

/// A single named latency value, in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyRecord {
    /// Category name ("Standalone" or "Cluster")
    pub name: String,

    /// Average latency in milliseconds, always finite
    pub latency: f64,
}

impl LatencyRecord {
    /// Create a record for the given deployment
    pub fn new(deployment: Deployment, latency: f64) -> Result<Self> {
        if !latency.is_finite() {
            return Err(AppError::invalid_number(
                deployment.argument_name(),
                latency.to_string(),
                "latency must be a finite number",
            ));
        }

        Ok(Self {
            name: deployment.name().to_string(),
            latency,
        })
    }
}

/// Parse a command-line latency argument into a finite `f64`.
///
/// Surrounding whitespace is ignored and scientific notation is accepted.
/// Empty input, non-numeric text, `NaN` and values that overflow to
/// infinity are rejected with [`AppError::InvalidNumber`].
pub fn parse_latency(argument: &str, input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_number(argument, input, "empty string"));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|e: std::num::ParseFloatError| AppError::invalid_number(argument, input, e.to_string()))?;

    if value.is_nan() {
        return Err(AppError::invalid_number(argument, input, "not a number"));
    }
    if value.is_infinite() {
        return Err(AppError::invalid_number(argument, input, "value is out of range"));
    }

    Ok(value)
}

/// Exactly one standalone and one cluster record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub standalone: LatencyRecord,
    pub cluster: LatencyRecord,
}

impl Comparison {
    /// Build a comparison from two already-parsed latencies
    pub fn new(standalone: f64, cluster: f64) -> Result<Self> {
        Ok(Self {
            standalone: LatencyRecord::new(Deployment::Standalone, standalone)?,
            cluster: LatencyRecord::new(Deployment::Cluster, cluster)?,
        })
    }

    /// Parse both command-line values and build the comparison.
    ///
    /// The standalone argument is checked first, so an invalid standalone
    /// value is reported even when the cluster value is also invalid.
    pub fn from_args(standalone: &str, cluster: &str) -> Result<Self> {
        let standalone = parse_latency(Deployment::Standalone.argument_name(), standalone)?;
        let cluster = parse_latency(Deployment::Cluster.argument_name(), cluster)?;
        Self::new(standalone, cluster)
    }

    /// Records in chart order, paired with their deployment
    pub fn records(&self) -> [(Deployment, &LatencyRecord); 2] {
        [
            (Deployment::Standalone, &self.standalone),
            (Deployment::Cluster, &self.cluster),
        ]
    }

    /// Derived difference figures for the verbose summary
    pub fn summary(&self) -> ComparisonSummary {
        ComparisonSummary::from_comparison(self)
    }
}

/// Difference between the cluster and the standalone baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    /// `cluster - standalone`, in milliseconds; `None` when it overflows
    pub difference_ms: Option<f64>,
    /// `cluster / standalone`; `None` when the baseline is zero or the
    /// quotient overflows
    pub ratio: Option<f64>,
    /// Relative change of the cluster against the baseline, in percent
    pub percent_change: Option<f64>,
    /// Deployment with the lower latency; `None` on a tie
    pub faster: Option<Deployment>,
}

impl ComparisonSummary {
    fn from_comparison(comparison: &Comparison) -> Self {
        let standalone = comparison.standalone.latency;
        let cluster = comparison.cluster.latency;

        let ratio = if standalone != 0.0 {
            Some(cluster / standalone).filter(|r| r.is_finite())
        } else {
            None
        };

        let faster = if cluster < standalone {
            Some(Deployment::Cluster)
        } else if standalone < cluster {
            Some(Deployment::Standalone)
        } else {
            None
        };

        Self {
            difference_ms: Some(cluster - standalone).filter(|d| d.is_finite()),
            ratio,
            percent_change: ratio.map(|r| (r - 1.0) * 100.0).filter(|p| p.is_finite()),
            faster,
        }
    }
}
