//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! Participant names and birth dates are PHI. Field values only reach the
//! log when `--log-data` is given; otherwise [`redact_value`] replaces them.
//!
//! # Log Levels
//!
//! - `error`: Fatal errors (unreadable upload, malformed CSV)
//! - `warn`: Encoding fallbacks, rejected batches
//! - `info`: Load and commit counts
//! - `debug`: Column resolution, per-batch validation counts
//! - `trace`: Per-value normalization (values redacted unless `--log-data`)

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder used when row-level logging is disabled.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Returns true if row-level logging is explicitly enabled.
pub fn log_data_enabled() -> bool {
    LOG_DATA_ENABLED.load(Ordering::Relaxed)
}

/// Returns the input value when PHI logging is enabled, otherwise a redacted token.
pub fn redact_value(value: &str) -> &str {
    if log_data_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Maximum level emitted by intake crates.
    pub level_filter: LevelFilter,
    /// Whether `RUST_LOG` may override `level_filter`.
    pub use_env_filter: bool,
    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
    /// Whether to include target (module path) in log output.
    pub with_target: bool,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
    /// Output format.
    pub format: LogFormat,
    /// Optional log file path. When set, logs are written to the file.
    pub log_file: Option<PathBuf>,
    /// Whether row-level (PHI) values may be logged.
    pub log_data: bool,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_timestamps: false,
            with_target: false,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
            log_data: false,
        }
    }
}

/// Installs the global subscriber described by `config`.
///
/// Call once at startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            init_logging_with_writer(config, Mutex::new(file));
        }
        None => init_logging_with_writer(config, io::stderr),
    }
    Ok(())
}

/// Installs the global subscriber with a caller-supplied writer.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    LOG_DATA_ENABLED.store(config.log_data, Ordering::Release);
    tracing_subscriber::registry()
        .with(format_layer(config, writer))
        .with(build_env_filter(config.level_filter, config.use_env_filter))
        .init();
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Formatting layer for the configured output format.
///
/// JSON output always carries timestamps and never ANSI codes.
fn format_layer<W>(config: &LogConfig, writer: W) -> BoxedLayer
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_target(config.with_target);
    match (config.format, config.with_timestamps) {
        (LogFormat::Json, _) => layer.json().boxed(),
        (LogFormat::Compact, true) => layer.compact().with_ansi(config.with_ansi).boxed(),
        (LogFormat::Compact, false) => layer
            .compact()
            .with_ansi(config.with_ansi)
            .without_time()
            .boxed(),
        (LogFormat::Pretty, true) => layer.with_ansi(config.with_ansi).boxed(),
        (LogFormat::Pretty, false) => layer.with_ansi(config.with_ansi).without_time().boxed(),
    }
}

/// Build an `EnvFilter` for the given level, optionally honoring `RUST_LOG`.
fn build_env_filter(level_filter: LevelFilter, use_env_filter: bool) -> EnvFilter {
    let level = level_filter.to_string().to_lowercase();
    // External crates stay at warn unless RUST_LOG says otherwise
    let default_filter = format!(
        "warn,intake_cli={level},intake_dates={level},intake_ingest={level}"
    );

    if use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
    } else {
        EnvFilter::new(default_filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(!config.log_data);
    }

    #[test]
    fn test_redact_value_when_disabled() {
        LOG_DATA_ENABLED.store(false, Ordering::Release);
        assert_eq!(redact_value("14/02/2013"), REDACTED_VALUE);
    }

    fn capture(config: &LogConfig) -> String {
        let file = tempfile::NamedTempFile::new().unwrap();
        let subscriber = tracing_subscriber::registry()
            .with(format_layer(config, Mutex::new(file.reopen().unwrap())));
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(rows = 3, "loaded roster");
        });
        std::fs::read_to_string(file.path()).unwrap()
    }

    #[test]
    fn test_json_layer_writes_structured_fields() {
        let config = LogConfig {
            format: LogFormat::Json,
            ..LogConfig::default()
        };
        let written = capture(&config);
        let line: serde_json::Value = serde_json::from_str(written.trim()).unwrap();
        assert_eq!(line["level"], "WARN");
        assert_eq!(line["fields"]["message"], "loaded roster");
        assert_eq!(line["fields"]["rows"], 3);
    }

    #[test]
    fn test_compact_layer_without_timestamps() {
        let config = LogConfig {
            format: LogFormat::Compact,
            with_ansi: false,
            ..LogConfig::default()
        };
        let written = capture(&config);
        assert!(written.trim_start().starts_with("WARN"));
        assert!(written.contains("loaded roster"));
        assert!(written.contains("rows=3"));
    }

    #[test]
    fn test_build_env_filter_lists_intake_crates() {
        let filter = build_env_filter(LevelFilter::DEBUG, false);
        let rendered = filter.to_string().to_lowercase();
        assert!(rendered.contains("intake_ingest=debug"));
        assert!(rendered.contains("intake_dates=debug"));
    }
}
