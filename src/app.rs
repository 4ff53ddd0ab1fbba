//! Main application orchestration and execution

use crate::{
    build_info,
    chart::ChartData,
    cli::Cli,
    config::{display_config_summary, load_config, validate_config, EnvManager, ValidationWarning},
    error::Result,
    log_debug, log_info,
    logging::{Logger, LoggerFactory},
    models::{Comparison, Config},
    output::{OutputCoordinator, RenderedChart},
    PKG_NAME, VERSION,
};
use std::io::Write;

/// Main application struct that coordinates all components
pub struct App {
    config: Config,
    standalone_metrics: String,
    cluster_metrics: String,
    warnings: Vec<ValidationWarning>,
    coordinator: OutputCoordinator,
    logger: Logger,
}

impl App {
    /// Create a new application instance from parsed CLI arguments
    pub fn new(cli: Cli) -> Result<Self> {
        let standalone_metrics = cli.standalone_metrics.clone();
        let cluster_metrics = cli.cluster_metrics.clone();
        let config = load_config(cli)?;
        Self::with_config(config, standalone_metrics, cluster_metrics)
    }

    /// Create an application instance from an already layered configuration
    pub fn with_config(config: Config, standalone_metrics: String, cluster_metrics: String) -> Result<Self> {
        let warnings = validate_config(&config)?;
        let logger = LoggerFactory::new(config.clone()).create_logger("app");
        let coordinator = OutputCoordinator::from_config(&config);

        Ok(Self {
            config,
            standalone_metrics,
            cluster_metrics,
            warnings,
            coordinator,
            logger,
        })
    }

    /// Replace the logger, e.g. with a capturing one
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Parse both latencies, build the chart and render it.
    ///
    /// Nothing is produced unless both values are valid.
    pub fn render(&self) -> Result<RenderedChart> {
        let correlation_id = self.logger.start_operation("render_comparison");

        let result = self.render_inner();
        if let Err(ref e) = result {
            self.logger.error("Rendering failed").correlation_id(&correlation_id).error_info(e).log();
        }

        self.logger.end_operation(&correlation_id, "render_comparison", result.is_ok());
        result
    }

    fn render_inner(&self) -> Result<RenderedChart> {
        let comparison = Comparison::from_args(&self.standalone_metrics, &self.cluster_metrics)?;
        self.logger
            .debug("Parsed latencies")
            .field("standalone_ms", comparison.standalone.latency)
            .field("cluster_ms", comparison.cluster.latency)
            .log();

        let chart = ChartData::from_comparison(&comparison, &self.config.title);
        let rendered = self.coordinator.render(&chart, &comparison)?;

        log_debug!(self.logger, "Rendered {} chart ({} bytes)", rendered.format, rendered.content.len());
        Ok(rendered)
    }

    /// Run the application against the process stdout and stderr
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        self.run_with(&mut stdout.lock(), &mut stderr.lock())
    }

    /// Run the application, writing the chart to `out` and diagnostics to `err`
    pub fn run_with<O, E>(&self, out: &mut O, err: &mut E) -> Result<()>
    where
        O: Write,
        E: Write,
    {
        if self.config.debug {
            self.write_debug_banner(err)?;
        }

        if !self.warnings.is_empty() {
            writeln!(err, "Configuration Warnings:")?;
            for warning in &self.warnings {
                writeln!(err, "  {}", warning.format(self.config.enable_color))?;
            }
        }

        let rendered = self.render()?;
        self.coordinator.deliver_to(&rendered, out, err)?;

        if let Some(path) = self.coordinator.output_path() {
            log_info!(self.logger, "Chart written to {}", path.display());
        }

        Ok(())
    }

    fn write_debug_banner<E: Write>(&self, err: &mut E) -> Result<()> {
        writeln!(err, "{} v{}", PKG_NAME, VERSION)?;
        writeln!(
            err,
            "Built {} for {} (commit {})",
            build_info::BUILD_TIME,
            build_info::TARGET_TRIPLE,
            build_info::GIT_COMMIT.unwrap_or("unknown")
        )?;
        writeln!(err)?;
        writeln!(err, "Configuration Summary:")?;
        writeln!(err, "{}", display_config_summary(&self.config))?;

        for (name, value) in EnvManager::active_overrides() {
            self.logger.debug("Environment override").field("variable", name).field("value", value).log();
        }
        writeln!(err)?;
        Ok(())
    }
}
