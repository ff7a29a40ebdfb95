//! Logging setup for our services.
//!
//! Everything logs to the console; ERROR and DEBUG events are additionally
//! written to a daily-rotating file (with caller file/line recorded) so that
//! production incidents can be reconstructed after the fact.

use std::path::PathBuf;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::{
    EnvFilter, Layer, filter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::error::{HelperError, HelperResult};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum log level filter (overridden by `RUST_LOG` when set)
    pub level: String,
    /// Directory for the rotated log files
    pub dir: PathBuf,
    /// Prefix for the rotated log files (date suffix is appended)
    pub file_prefix: String,
    /// Rotated files kept on disk before the oldest is pruned
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: PathBuf::from("./app-logs"),
            file_prefix: "app.log".to_string(),
            max_files: 100,
        }
    }
}

impl LogConfig {
    /// Create config with info level and default file layout
    pub fn info() -> Self {
        Self::default()
    }

    /// Create config with debug level
    pub fn debug() -> Self {
        Self {
            level: "debug".to_string(),
            ..Default::default()
        }
    }

    /// Set the log-file directory
    pub fn with_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.dir = dir.into();
        self
    }

    /// Set the log-file prefix
    pub fn with_file_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    /// Set how many rotated files to keep
    pub fn with_max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    /// Set the level filter
    pub fn with_level<S: Into<String>>(mut self, level: S) -> Self {
        self.level = level.into();
        self
    }

    /// Install the global subscriber with this configuration.
    ///
    /// Returns a guard that must be kept alive for the file writer to flush;
    /// dropping it shuts down the background logging thread.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use apphelper::logging::LogConfig;
    ///
    /// let _guard = LogConfig::info().init().expect("logging init");
    /// ```
    pub fn init(self) -> HelperResult<WorkerGuard> {
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .map_err(|e| HelperError::Logging(e.to_string()))?;

        let file_appender = tracing_appender::rolling::Builder::new()
            .rotation(Rotation::DAILY)
            .filename_prefix(self.file_prefix.as_str())
            .max_log_files(self.max_files)
            .build(&self.dir)
            .map_err(|e| HelperError::Logging(e.to_string()))?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // Only errors and debug events go to the file.
        let file_filter = filter::filter_fn(|meta| {
            let level = *meta.level();
            level == Level::ERROR || level == Level::DEBUG
        });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer())
            .with(
                fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(file_filter),
            )
            .try_init()
            .map_err(|e| HelperError::Logging(e.to_string()))?;

        Ok(guard)
    }
}
