//! Environment variable handling and .env file management

use crate::error::{ErrorContext, Result};
use std::path::Path;

/// Environment variables understood by the renderer
pub const SUPPORTED_ENV_VARS: &[&str] = &[
    "CHART_TITLE",
    "CHART_WIDTH",
    "CHART_HEIGHT",
    "BAR_WIDTH",
    "OUTPUT_FORMAT",
    "CHART_OUTPUT",
    "ENABLE_COLOR",
];

/// Environment variable configuration manager
pub struct EnvManager;

impl EnvManager {
    /// Load an env file if it exists; returns whether a file was loaded.
    ///
    /// Variables already present in the process environment take precedence
    /// over values from the file.
    pub fn load_env_file(path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }

        dotenv::from_path(path).with_context(|| format!("Failed to load {}", path.display()))?;
        Ok(true)
    }

    /// Supported variables that are currently set, with their values
    pub fn active_overrides() -> Vec<(&'static str, String)> {
        SUPPORTED_ENV_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok().map(|value| (*name, value)))
            .collect()
    }
}
