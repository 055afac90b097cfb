//! Logging utilities for susres
//!
//! Diagnostics go to stderr through `tracing`; stdout is reserved for the
//! single line of command output.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level as string, overridden by `RUST_LOG` when set
    pub level: String,

    /// Include timestamps
    pub timestamps: bool,

    /// Include module target
    pub show_target: bool,

    /// Use ANSI colors
    pub ansi_colors: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            timestamps: false,
            show_target: false,
            ansi_colors: false,
        }
    }
}

impl LogConfig {
    /// Create a debug configuration with verbose output
    pub fn debug() -> Self {
        Self {
            level: "debug".to_string(),
            timestamps: true,
            show_target: true,
            ..Default::default()
        }
    }

    /// Set log level
    pub fn with_level(mut self, level: &str) -> Self {
        self.level = level.to_string();
        self
    }

    /// Parse level string to tracing Level
    pub fn get_level(&self) -> Level {
        match self.level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" | "warning" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN,
        }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.get_level().as_str().to_lowercase()))
    }
}

/// Initialize logging with the given configuration
///
/// Only the first call installs a subscriber; later calls are no-ops.
pub fn init_logging(config: &LogConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_ansi(config.ansi_colors)
        .with_target(config.show_target)
        .with_writer(std::io::stderr);

    let _ = if config.timestamps {
        builder.try_init()
    } else {
        builder.without_time().try_init()
    };
}

/// Initialize logging for the command line tool
pub fn init_cli_logging() {
    init_logging(&LogConfig::default());
}

/// Initialize debug logging
pub fn init_debug_logging() {
    init_logging(&LogConfig::debug());
}
