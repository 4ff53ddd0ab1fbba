//! Error handling for the latency comparison renderer

use thiserror::Error;

/// Custom error types for the latency comparison renderer
#[derive(Error, Debug)]
pub enum AppError {
    /// A required positional argument was not supplied
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    /// An argument could not be converted to a finite floating-point number
    #[error("Invalid number for {argument}: '{input}' ({reason})")]
    InvalidNumber {
        argument: String,
        input: String,
        reason: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Command-line usage errors other than missing arguments
    #[error("Usage error: {0}")]
    Usage(String),

    /// Chart drawing errors
    #[error("Render error: {0}")]
    Render(String),

    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(String),

    /// Parsing errors (JSON, etc.)
    #[error("Parsing error: {0}")]
    Parse(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a new missing argument error
    pub fn missing_argument<S: Into<String>>(message: S) -> Self {
        Self::MissingArgument(message.into())
    }

    /// Create a new invalid number error for the named argument
    pub fn invalid_number<A, I, R>(argument: A, input: I, reason: R) -> Self
    where
        A: Into<String>,
        I: Into<String>,
        R: Into<String>,
    {
        Self::InvalidNumber {
            argument: argument.into(),
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new usage error
    pub fn usage<S: Into<String>>(message: S) -> Self {
        Self::Usage(message.into())
    }

    /// Create a new render error
    pub fn render<S: Into<String>>(message: S) -> Self {
        Self::Render(message.into())
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    /// Create a new parsing error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::MissingArgument(_) => "ARGUMENT",
            Self::InvalidNumber { .. } => "NUMBER",
            Self::Config(_) => "CONFIG",
            Self::Usage(_) => "USAGE",
            Self::Render(_) => "RENDER",
            Self::Io(_) => "IO",
            Self::Parse(_) => "PARSE",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingArgument(msg) => {
                format!("{}\n\nSuggestion: Pass both values, e.g. `lcmp 120.5 45.2` (standalone first, cluster second).", msg)
            }
            Self::InvalidNumber { argument, input, .. } => {
                format!("'{}' is not a valid latency for {}.\n\nSuggestion: Use a plain decimal or scientific number such as 120.5 or 1e3.", input, argument)
            }
            Self::Config(msg) => {
                format!("Configuration problem: {}\n\nSuggestion: Check your .env file, environment variables or command line options.", msg)
            }
            Self::Usage(msg) => {
                format!("Invalid usage: {}\n\nSuggestion: Run with --help to see the accepted options.", msg)
            }
            Self::Render(msg) => {
                format!("Chart rendering failed: {}\n\nSuggestion: Try a different output format with --format.", msg)
            }
            Self::Io(msg) => {
                format!("File operation failed: {}\n\nSuggestion: Check the output path, file permissions and disk space.", msg)
            }
            Self::Parse(msg) => {
                format!("Failed to parse data: {}\n\nSuggestion: Check the format of your input data or configuration files.", msg)
            }
            Self::Internal(msg) => {
                format!("Internal error: {}\n\nThis is likely a bug. Please report this issue with the error details.", msg)
            }
        }
    }

    /// Get exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Parse(_) => 1,  // Invalid configuration
            Self::MissingArgument(_) | Self::Usage(_) => 2,  // Invalid invocation
            Self::InvalidNumber { .. } => 3,  // Bad latency value
            Self::Render(_) => 4,  // Charting backend failure
            Self::Io(_) => 5,  // I/O issues
            Self::Internal(_) => 99,  // Internal/unexpected errors
        }
    }

    /// Format error for console display with color coding
    pub fn format_for_console(&self, use_color: bool) -> String {
        let category = self.category();
        let message = self.to_string();

        if use_color {
            use colored::Colorize;
            match self {
                Self::MissingArgument(_) | Self::InvalidNumber { .. } | Self::Usage(_) => {
                    format!("[{}] {}", category.red().bold(), message.red())
                }
                Self::Config(_) | Self::Parse(_) => {
                    format!("[{}] {}", category.yellow().bold(), message.yellow())
                }
                Self::Render(_) | Self::Io(_) => {
                    format!("[{}] {}", category.cyan().bold(), message.cyan())
                }
                Self::Internal(_) => {
                    format!("[{}] {}", category.bright_red().bold(), message.bright_red())
                }
            }
        } else {
            format!("[{}] {}", category, message)
        }
    }
}

// Standard library error conversions
impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::parse(format!("JSON parse error: {}", error))
    }
}

impl From<dotenv::Error> for AppError {
    fn from(error: dotenv::Error) -> Self {
        Self::config(format!("Environment file error: {}", error))
    }
}

/// Custom Result type for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Error context trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add context to an error, keeping its category
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    /// Add static context to an error
    fn context(self, message: &'static str) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<AppError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let context = f();
            match e.into() {
                AppError::Io(msg) => AppError::Io(format!("{}: {}", context, msg)),
                AppError::Render(msg) => AppError::Render(format!("{}: {}", context, msg)),
                AppError::Config(msg) => AppError::Config(format!("{}: {}", context, msg)),
                other => AppError::internal(format!("{}: {}", context, other)),
            }
        })
    }

    fn context(self, message: &'static str) -> Result<T> {
        self.with_context(|| message.to_string())
    }
}

/// Error reporter for structured error logging and user feedback
pub struct ErrorReporter {
    pub use_color: bool,
    pub verbose: bool,
}

impl ErrorReporter {
    /// Create a new error reporter
    pub fn new(use_color: bool, verbose: bool) -> Self {
        Self { use_color, verbose }
    }

    /// Render the report that would be written to stderr
    pub fn format_report(&self, error: &AppError) -> String {
        let mut report = error.format_for_console(self.use_color);
        if self.verbose {
            report.push_str("\n\n");
            report.push_str(&error.user_friendly_message());
        }
        report
    }

    /// Report an error to the user
    pub fn report_error(&self, error: &AppError) {
        eprintln!("{}", self.format_report(error));
    }
}
